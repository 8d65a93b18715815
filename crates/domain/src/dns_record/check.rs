use super::DnsRecord;
use crate::DomainError;

pub const MAX_NAME_LEN: usize = 253;
pub const MAX_LABEL_LEN: usize = 63;

/// Upper bound for TTLs (RFC 2181 §8).
pub const MAX_TTL: u32 = 2_147_483_647;

impl DnsRecord {
    /// Validates a fully-qualified, dot-terminated host name.
    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        let Some(body) = name.strip_suffix('.') else {
            return Err(format!("Name '{}' must be dot-terminated", name));
        };
        if body.is_empty() {
            return Err("Root name cannot own records".to_string());
        }
        if body.len() > MAX_NAME_LEN {
            return Err(format!("Name cannot exceed {} characters", MAX_NAME_LEN));
        }

        for label in body.split('.') {
            Self::validate_label(label)?;
        }
        Ok(())
    }

    fn validate_label(label: &str) -> Result<(), String> {
        if label.is_empty() {
            return Err("Name contains an empty label".to_string());
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!(
                "Label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("Label '{}' cannot start or end with '-'", label));
        }
        let valid = label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(format!(
                "Label '{}' contains invalid characters (only alphanumeric, hyphens and underscores are allowed)",
                label
            ));
        }
        Ok(())
    }

    pub fn validate_ttl(ttl: u32) -> Result<(), String> {
        if ttl > MAX_TTL {
            return Err(format!("TTL cannot exceed {}", MAX_TTL));
        }
        Ok(())
    }

    /// Type-independent checks, run before the type-specific checker.
    ///
    /// Normalizes the owner name to lower case and replaces a zero TTL with
    /// `default_ttl`.
    pub fn check_common(&mut self, default_ttl: u32) -> Result<(), DomainError> {
        Self::validate_name(&self.name).map_err(DomainError::InvalidRecord)?;
        self.name = self.name.to_ascii_lowercase();

        if self.ttl == 0 {
            self.ttl = default_ttl;
        }
        Self::validate_ttl(self.ttl).map_err(DomainError::InvalidRecord)?;

        Ok(())
    }
}
