// Environment variable utils

use std::env;

/// Gets boolean env var
///
/// # Arguments
///
/// * `var_name` - The name of the environment variable
/// * `default_val` - The default value
///
/// # Return value
///
/// Returns true if the value of the variable is 'YES' or 'TRUE' (Case insensitive)
/// Returns false if the value of the variable is 'NO' or 'FALSE' (Case insensitive)
/// Otherwise, returns the value of default_val
pub fn get_env_bool(var_name: &str, default_val: bool) -> bool {
    match env::var(var_name) {
        Ok(var_str) => match var_str.trim().to_uppercase().as_str() {
            "YES" | "TRUE" => true,
            "NO" | "FALSE" => false,
            _ => default_val,
        },
        Err(_) => default_val,
    }
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_bool() {
        let var = "U2F_SESSION_ID_TEST_ENV_BOOL";

        env::remove_var(var);
        assert!(get_env_bool(var, true));
        assert!(!get_env_bool(var, false));

        env::set_var(var, "yes");
        assert!(get_env_bool(var, false));

        env::set_var(var, "TRUE");
        assert!(get_env_bool(var, false));

        env::set_var(var, "No");
        assert!(!get_env_bool(var, true));

        env::set_var(var, "false");
        assert!(!get_env_bool(var, true));

        env::set_var(var, "1");
        assert!(get_env_bool(var, true));
        assert!(!get_env_bool(var, false));

        env::remove_var(var);
    }
}
