use agent::{Config, Mouth, PromptSet, SpeakableMouth, StdoutMouth, init_logging};
use std::sync::Arc;
use tracing::info;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    init_logging("info")?;

    info!(
        timezone = %config.timezone_id,
        model = %config.ollama_model,
        ollama = %config.ollama_host,
        temperature = config.ollama_temperature,
        tts = %config.tts_host,
        speed = config.tts_speed,
        "configuration loaded"
    );

    let prompts = PromptSet::load(&config, chrono::Utc::now())?;
    info!("{}", prompts.date_context);

    println!("{}", prompts.system_prompt);

    let mouth = SpeakableMouth::new(Arc::new(StdoutMouth));
    mouth.speak(&prompts.greeting).await;
    Ok(())
}
