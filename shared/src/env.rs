pub enum Environment {
    Development,
    Production,
}

pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = "development";
    #[cfg(not(debug_assertions))]
    let default_env = "production";

    let env = std::env::var("ENV").unwrap_or_else(|_| default_env.to_string());
    Environment::from(env.as_str())
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }
}
