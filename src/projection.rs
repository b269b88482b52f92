use crate::compiler::CompiledSchema;
use crate::error::ConfigurationError;
use crate::model::Path;
use std::fmt;
use std::str::FromStr;

/// What the caller receives after a call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// The operation's documented primary output member.
    #[default]
    Primary,
    /// `*`: the whole response.
    FullResponse,
    /// A dotted member path inside the response.
    Field(Path),
    /// `^Name`: the value bound to an input parameter; nothing is sent.
    EchoParameter(String),
}

impl FromStr for Selector {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" {
            return Ok(Selector::FullResponse);
        }
        if let Some(name) = s.strip_prefix('^') {
            if name.is_empty() {
                return Err(invalid(s, "'^' must be followed by a parameter name"));
            }
            return Ok(Selector::EchoParameter(name.to_string()));
        }
        Path::parse(s)
            .map(Selector::Field)
            .map_err(|_| invalid(s, "expected '*', '^ParameterName' or a response member path"))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Primary => f.write_str("(primary output)"),
            Selector::FullResponse => f.write_str("*"),
            Selector::Field(path) => write!(f, "{}", path),
            Selector::EchoParameter(name) => write!(f, "^{}", name),
        }
    }
}

fn invalid(selector: &str, message: &str) -> ConfigurationError {
    ConfigurationError::InvalidSelector {
        selector: selector.to_string(),
        message: message.to_string(),
    }
}

/// A validated output selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Projection {
    selector: Selector,
}

impl Projection {
    /// Combines a selector string with the full-response switch.
    ///
    /// The switch alone behaves like `*`. Combined with `^Name` or a member
    /// path it is rejected, since the two ask for different outputs.
    pub fn new(select: Option<&str>, full_response: bool) -> Result<Self, ConfigurationError> {
        let selector = select
            .map(str::parse::<Selector>)
            .transpose()?
            .unwrap_or_default();

        let selector = match (selector, full_response) {
            (selector, false) => selector,
            (Selector::Primary | Selector::FullResponse, true) => Selector::FullResponse,
            (conflicting, true) => {
                return Err(invalid(
                    &conflicting.to_string(),
                    "cannot be combined with a request for the full response",
                ));
            }
        };
        Ok(Self { selector })
    }

    pub fn from_selector(selector: Selector) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Checks the selector against the operation before anything is sent.
    pub fn validate(&self, schema: &CompiledSchema) -> Result<(), ConfigurationError> {
        match &self.selector {
            Selector::EchoParameter(name) if schema.parameter(name).is_none() => Err(invalid(
                &self.selector.to_string(),
                &format!(
                    "'{}' is not a parameter of {}",
                    name,
                    schema.operation()
                ),
            )),
            _ => Ok(()),
        }
    }

    /// Projects a response. Members that do not exist project to `null`.
    pub fn apply(&self, response: serde_json::Value, primary: Option<&Path>) -> serde_json::Value {
        match &self.selector {
            Selector::Primary => match primary {
                Some(path) => select_member(response, path),
                None => response,
            },
            Selector::Field(path) => select_member(response, path),
            Selector::FullResponse | Selector::EchoParameter(_) => response,
        }
    }
}

fn select_member(response: serde_json::Value, path: &Path) -> serde_json::Value {
    let mut current = response;
    for segment in path.segments() {
        current = match current {
            serde_json::Value::Object(mut members) => members
                .remove(segment)
                .unwrap_or(serde_json::Value::Null),
            _ => return serde_json::Value::Null,
        };
    }
    current
}
