//! Commands that call the external analysis and image services.

use super::AppContext;
use super::dreams::print_detail;
use anyhow::Result;
use dreamdiary_application::DreamDetailService;
use dreamdiary_interaction::{ImageProvider, OllamaApiAgent, image_generator};
use std::sync::Arc;
use uuid::Uuid;

pub async fn analyze(app: &AppContext, id: &Uuid) -> Result<()> {
    let agent = OllamaApiAgent::from_storage(&app.secrets);
    tracing::info!("[cli] Using Ollama at {} ({})", agent.base_url(), agent.model());

    let service = DreamDetailService::new(app.dreams.clone(), app.images.clone())
        .with_analyzer(Arc::new(agent));
    let dream = service.analyze(id).await?;
    print_detail(&dream);
    Ok(())
}

pub async fn image(app: &AppContext, id: &Uuid, provider: ImageProvider) -> Result<()> {
    let generator = image_generator(provider, &app.secrets)?;
    let service =
        DreamDetailService::new(app.dreams.clone(), app.images.clone()).with_generator(generator);
    let dream = service.generate_image(id).await?;
    if let Some(path) = &dream.generated_image_url {
        println!("{}", path);
    }
    Ok(())
}
