use super::error::UtilsError;
use log::error;
use regex::Regex;

/// Create a compiled Regex
pub(crate) fn create_regex(input: &str) -> Result<Regex, UtilsError> {
    let regex_result = Regex::new(input);
    let regex = match regex_result {
        Ok(result) => result,
        Err(err) => {
            error!("[assist-core] Bad regex {input}, error: {err:?}");
            return Err(UtilsError::Regex);
        }
    };

    Ok(regex)
}

/**
 * Build a case insensitive regex matching any path that ends with `key_path`.
 * Registry exports prefix paths differently (`ROOT\`, `HKCU\`, `NTUSER.DAT\`), so only the suffix is anchored
 */
pub(crate) fn key_suffix_regex(key_path: &str) -> Result<Regex, UtilsError> {
    let trimmed = key_path.trim_matches('\\');
    create_regex(&format!(r"(?i)(^|\\){}\\?$", regex::escape(trimmed)))
}
