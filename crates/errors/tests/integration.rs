//! Integration tests for error types

#[cfg(test)]
mod tests {
    use onefile_errors::*;

    #[test]
    fn test_error_conversion() {
        let env_err = EnvironmentError::InterpreterNotFound {
            interpreter: "python3.11".into(),
        };
        let err: Error = env_err.into();
        assert!(matches!(err, Error::Environment(_)));
    }

    #[test]
    fn test_error_display() {
        let err = PackagingError::EmbeddedBinaryMissing {
            path: "/usr/bin/7z".into(),
        };
        assert_eq!(err.to_string(), "embedded binary not found at /usr/bin/7z");
    }

    #[test]
    fn test_error_clone() {
        let err = InstallError::InstallerFailed {
            code: Some(1),
            stderr: "no matching distribution".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_user_facing_codes_are_stable() {
        let err: Error = EnvironmentError::InterpreterNotFound {
            interpreter: "python3.11".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("environment.interpreter_not_found"));
        assert!(err.user_hint().is_some());
        assert!(!err.is_retryable());

        let err: Error = InstallError::InstallerFailed {
            code: Some(1),
            stderr: "network unreachable".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("install.installer_failed"));
        assert!(err.is_retryable());
    }
}
