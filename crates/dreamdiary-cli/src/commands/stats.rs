use super::AppContext;
use anyhow::Result;
use chrono::Utc;
use dreamdiary_core::statistics::TimeRange;

pub async fn show(app: &AppContext, range: TimeRange, json: bool) -> Result<()> {
    let stats = app.statistics.compute(range, Utc::now()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Dreams ({}): {}", range, stats.total_dreams);
    println!("Average per week: {:.1}", stats.average_dreams_per_week);

    println!();
    println!("Moods:");
    for (mood, count) in &stats.mood_distribution {
        println!("  {} {:<10} {}", mood.emoji(), mood.display_name(), count);
    }

    if !stats.most_common_themes.is_empty() {
        println!();
        println!("Most common themes:");
        for (theme, count) in &stats.most_common_themes {
            println!("  {:<20} {}", theme, count);
        }
    }

    if !stats.most_recurring_elements.is_empty() {
        println!();
        println!("Recurring elements:");
        for (element, count) in &stats.most_recurring_elements {
            println!("  {:<20} {}", element, count);
        }
    }

    Ok(())
}
