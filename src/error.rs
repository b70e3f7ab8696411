use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Required documentation file '{path}' not found")]
    MissingFile { path: String },

    #[error("Documentation file '{path}' appears incomplete (too short)")]
    Incomplete { path: String },

    #[error("Documentation file '{path}' missing section headers")]
    MissingHeaders { path: String },

    #[error("{document} missing required section: {section}")]
    MissingSection { document: String, section: String },

    #[error("Function '{name}' found in source but not documented in technical specification")]
    UndocumentedFunction { name: String },

    #[error("Critical function '{name}' not found in technical documentation")]
    CriticalFunctionUndocumented { name: String },
}

impl CheckError {
    /// True for failures of a documentation assertion, as opposed to
    /// problems reading or parsing the inputs.
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            CheckError::MissingFile { .. }
                | CheckError::Incomplete { .. }
                | CheckError::MissingHeaders { .. }
                | CheckError::MissingSection { .. }
                | CheckError::UndocumentedFunction { .. }
                | CheckError::CriticalFunctionUndocumented { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = CheckError::MissingSection {
            document: "Deployment guide".to_string(),
            section: "Troubleshooting Guide".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Deployment guide missing required section: Troubleshooting Guide"
        );

        let err = CheckError::Incomplete {
            path: "PDW_Deployment_Guide.md".to_string(),
        };
        assert!(err.to_string().contains("PDW_Deployment_Guide.md"));
        assert!(err.to_string().contains("incomplete"));
    }

    #[test]
    fn test_is_assertion() {
        assert!(CheckError::UndocumentedFunction { name: "main".into() }.is_assertion());
        assert!(!CheckError::Parse("bad".into()).is_assertion());
        assert!(!CheckError::FileNotFound("x.py".into()).is_assertion());
    }

    #[test]
    fn test_json_error_converts() {
        fn decode(text: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(text)?)
        }

        let err = decode("{").unwrap_err();
        assert!(matches!(err, CheckError::Json(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
        assert!(!err.is_assertion());
    }
}
