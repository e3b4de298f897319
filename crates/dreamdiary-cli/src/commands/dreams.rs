use super::AppContext;
use anyhow::Result;
use dreamdiary_core::dream::{Dream, DreamMood};
use uuid::Uuid;

pub async fn add(
    app: &AppContext,
    title: String,
    content: String,
    mood: DreamMood,
    tags: Vec<String>,
) -> Result<()> {
    let tags = tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    let dream = app
        .journal
        .add(Dream::new(title, content, mood).with_tags(tags))
        .await?;
    println!("{}", dream.id);
    Ok(())
}

pub async fn list(app: &AppContext) -> Result<()> {
    let dreams = app.journal.list().await?;
    if dreams.is_empty() {
        println!("No dreams recorded yet.");
    }
    for dream in &dreams {
        print_line(dream);
    }
    Ok(())
}

pub async fn show(app: &AppContext, id: &Uuid) -> Result<()> {
    let dream = app.journal.get(id).await?;
    print_detail(&dream);
    Ok(())
}

pub async fn delete(app: &AppContext, id: &Uuid) -> Result<()> {
    app.journal.delete(id).await?;
    println!("Deleted {}", id);
    Ok(())
}

pub async fn search(app: &AppContext, query: Option<&str>, tag: Option<&str>) -> Result<()> {
    let found = match (query, tag) {
        (_, Some(tag)) => app.search.search_by_tag(tag).await?,
        (Some(query), None) => app.search.search(query).await?,
        (None, None) => Vec::new(),
    };
    if found.is_empty() {
        println!("No matching dreams.");
    }
    for dream in &found {
        print_line(dream);
    }
    Ok(())
}

pub async fn tags(app: &AppContext) -> Result<()> {
    for tag in app.search.all_tags().await? {
        println!("{}", tag);
    }
    Ok(())
}

fn print_line(dream: &Dream) {
    println!(
        "{}  {}  {} {}",
        dream.id,
        dream.date.format("%Y-%m-%d"),
        dream.mood.emoji(),
        dream.title
    );
}

pub(crate) fn print_detail(dream: &Dream) {
    println!("{} {}", dream.mood.emoji(), dream.title);
    println!("{}  ({})", dream.date.format("%Y-%m-%d %H:%M"), dream.mood.display_name());
    if !dream.tags.is_empty() {
        println!("Tags: {}", dream.tags.join(", "));
    }
    println!();
    println!("{}", dream.content);

    if let Some(analysis) = &dream.analysis {
        println!();
        println!("Themes: {}", analysis.themes.join(", "));
        println!("Interpretation: {}", analysis.interpretation);
        println!("Emotional tone: {}", analysis.emotional_tone);
        println!("Recurring elements: {}", analysis.recurring_elements.join(", "));
        println!("Psychological perspective: {}", analysis.psychological_perspective);
    }

    if let Some(path) = &dream.generated_image_url {
        println!();
        println!("Image: {}", path);
    }
}
