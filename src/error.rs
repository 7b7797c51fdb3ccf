use std::fmt;

/// Failures surfaced by the studio. Provider failures never reach a
/// caller; the gateway logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Provider could not be reached
    HttpError(String)
  , /// Provider answered with a non-success status
    ApiError(String)
  , /// Provider envelope did not decode
    ParseError(String)
  , /// Provider envelope carried no text
    EmptyResponse(String)
  , /// Request body was not valid JSON for the endpoint
    RequestBody(String)
  , /// Caller input is incomplete (maps to a 4xx)
    Validation(String)
  , /// Startup settings could not be applied
    InvalidConfiguration(String)
}

impl Error
{   pub fn is_validation(&self) -> bool
    {   matches!(self, Error::Validation(_))
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::HttpError(msg) => {
              write!(f, "provider unreachable: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "provider rejected request: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "undecodable provider envelope: {}", msg)
            }
          , Error::EmptyResponse(provider) => {
              write!(f, "{} response contained no text", provider)
            }
          , Error::RequestBody(msg) => {
              write!(f, "malformed request body: {}", msg)
            }
          , Error::Validation(msg) => write!(f, "{}", msg)
          , Error::InvalidConfiguration(msg) => {
              write!(f, "invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
