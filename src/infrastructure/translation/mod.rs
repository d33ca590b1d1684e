mod echo_translator;
mod libre_translate_client;

pub use echo_translator::EchoTranslator;
pub use libre_translate_client::LibreTranslateClient;
