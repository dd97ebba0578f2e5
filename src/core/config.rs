use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub system_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_hostname = env::var("COLLOQUY_API_HOSTNAME")
            .unwrap_or_else(|_| "https://api.deepinfra.com/v1/openai".to_string());
        let api_key =
            env::var("COLLOQUY_API_KEY").unwrap_or_else(|_| "thiswontworkwithoutakey".to_string());
        let model = env::var("COLLOQUY_MODEL")
            .unwrap_or_else(|_| "mistralai/Mixtral-8x7B-Instruct-v0.1".to_string());
        let system_message = env::var("COLLOQUY_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| "You are a helpful assistant.".to_string());

        Self {
            api_hostname,
            api_key,
            model,
            system_message,
        }
    }
}
