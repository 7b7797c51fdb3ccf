//! Ordered keyword rules, evaluated first-match-wins

/// One rule: any keyword appearing in the text selects `outcome`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T>
{   pub keywords: &'static [&'static str]
  , pub outcome: T
}

impl<T> KeywordRule<T>
{   /// Case-sensitive substring test; callers lower-case first.
    pub fn matches(&self, text: &str) -> bool
    {   self.keywords.iter().any(|k| text.contains(k))
    }
}

/// Lower-case `text` and return the outcome of the first matching rule.
pub fn first_match<T: Copy>(
  rules: &[KeywordRule<T>]
, text: &str
) -> Option<T>
{   let lowered = text.to_lowercase();
    rules
      .iter()
      .find(|rule| rule.matches(&lowered))
      .map(|rule| rule.outcome)
}

/// A predicate-driven rule, for heuristics that are not keyword tests.
pub struct PredicateRule<I: ?Sized, T>
{   pub name: &'static str
  , pub test: fn(&I) -> bool
  , pub outcome: T
}

pub fn first_predicate<I: ?Sized, T: Copy>(
  rules: &[PredicateRule<I, T>]
, input: &I
) -> Option<T>
{   rules
      .iter()
      .find(|rule| (rule.test)(input))
      .map(|rule| rule.outcome)
}

#[cfg(test)]
mod tests
{   use super::*;

    const RULES: &[KeywordRule<u8>] = &[
      KeywordRule { keywords: &["patah hati"], outcome: 1 }
    , KeywordRule { keywords: &["hati", "cinta"], outcome: 2 }
    ];

    #[test]
    fn test_earlier_rule_wins_over_better_match()
    {   assert_eq!(first_match(RULES, "Patah Hati di Cinta"), Some(1));
        assert_eq!(first_match(RULES, "cinta pertama"), Some(2));
        assert_eq!(first_match(RULES, "laut biru"), None);
    }

    #[test]
    fn test_predicate_rules_in_order()
    {   let rules: &[PredicateRule<str, &str>] = &[
          PredicateRule
          {   name: "long"
            , test: |s| s.len() > 5
            , outcome: "long"
          }
        , PredicateRule
          {   name: "any"
            , test: |_| true
            , outcome: "short"
          }
        ];
        assert_eq!(first_predicate(rules, "panjang sekali"), Some("long"));
        assert_eq!(first_predicate(rules, "abc"), Some("short"));
    }
}
