use super::AppContext;
use anyhow::{Context, Result, bail};
use chrono::NaiveTime;
use dreamdiary_core::settings::{LucidDreamingTechnique, Settings};

pub async fn show(app: &AppContext) -> Result<()> {
    let s = app.settings.load().await?;
    println!("dark_mode            {}", s.is_dark_mode_enabled);
    println!("notifications        {}", s.notifications_enabled);
    println!("notification_time    {}", s.notification_time.format("%H:%M"));
    println!("lucid_dreaming       {}", s.lucid_dreaming_enabled);
    println!(
        "technique            {} ({})",
        s.selected_lucid_technique,
        s.selected_lucid_technique.display_name()
    );
    println!("lucid_reminder_time  {}", s.lucid_dream_reminder_time.format("%H:%M"));
    println!("lucid_tips           {}", s.show_lucid_dream_tips);
    Ok(())
}

pub async fn set(app: &AppContext, key: &str, value: &str) -> Result<()> {
    let mut settings = app.settings.load().await?;
    apply(&mut settings, key, value)?;
    app.settings.save(&settings).await?;
    println!("{} = {}", key, value);
    Ok(())
}

pub async fn tip(app: &AppContext) -> Result<()> {
    match app.settings.lucid_tip(&mut rand::thread_rng()).await? {
        Some(tip) => println!("{}", tip),
        None => println!("Lucid dreaming tips are turned off."),
    }
    Ok(())
}

fn apply(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "dark_mode" => settings.is_dark_mode_enabled = parse_bool(value)?,
        "notifications" => settings.notifications_enabled = parse_bool(value)?,
        "notification_time" => settings.notification_time = parse_time(value)?,
        "lucid_dreaming" => settings.lucid_dreaming_enabled = parse_bool(value)?,
        "technique" => {
            settings.selected_lucid_technique = value
                .parse::<LucidDreamingTechnique>()
                .with_context(|| format!("Unknown technique '{}'", value))?
        }
        "lucid_reminder_time" => settings.lucid_dream_reminder_time = parse_time(value)?,
        "lucid_tips" => settings.show_lucid_dream_tips = parse_bool(value)?,
        other => bail!("Unknown setting '{}'", other),
    }
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => bail!("Expected true or false, got '{}'", value),
    }
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .with_context(|| format!("Expected HH:MM, got '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_known_keys() {
        let mut settings = Settings::default();
        apply(&mut settings, "lucid_dreaming", "on").unwrap();
        apply(&mut settings, "technique", "WBTB").unwrap();
        apply(&mut settings, "notification_time", "07:30").unwrap();

        assert!(settings.lucid_dreaming_enabled);
        assert_eq!(settings.selected_lucid_technique, LucidDreamingTechnique::Wbtb);
        assert_eq!(settings.notification_time, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
    }

    #[test]
    fn test_apply_rejects_bad_input() {
        let mut settings = Settings::default();
        assert!(apply(&mut settings, "volume", "11").is_err());
        assert!(apply(&mut settings, "dark_mode", "maybe").is_err());
        assert!(apply(&mut settings, "lucid_reminder_time", "25:00").is_err());
        assert!(apply(&mut settings, "technique", "flying").is_err());
        assert_eq!(settings, Settings::default());
    }
}
