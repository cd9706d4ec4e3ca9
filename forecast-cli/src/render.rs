use forecast_core::{Config, ForecastDay, ForecastModel};

/// Place name, current conditions, then one line per day slot.
pub fn forecast(place: &str, model: &ForecastModel) -> String {
    let now = model.current_day();

    let mut out = format!(
        "{place} ({})\nNow: {} {} [{}]\n\n",
        model.timezone,
        degrees(now.current_temperature),
        now.category,
        now.category.symbol_name()
    );

    for day in model.day_slots() {
        out.push_str(&day_line(&day));
        out.push('\n');
    }

    out
}

fn day_line(day: &ForecastDay) -> String {
    format!(
        "{:<6}{:<14}{:>5} / {:<5} avg {}",
        day.label,
        day.category.to_string(),
        degrees(day.temperature_high),
        degrees(day.temperature_low),
        day.average_temperature().map_or_else(|| "-".to_string(), |t| format!("{t:.1}°")),
    )
}

fn degrees(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |t| format!("{t:.0}°"))
}

pub fn locations(config: &Config) -> String {
    if config.locations.is_empty() {
        return "No saved locations. Run `forecast configure <name>` to add one.\n".to_string();
    }

    let mut names: Vec<_> = config.locations.keys().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let saved = &config.locations[name];
            let marker =
                if config.default_location.as_deref() == Some(name.as_str()) { "*" } else { " " };
            format!("{marker} {name:<16} {:>9.4} {:>10.4}\n", saved.latitude, saved.longitude)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::{Coordinates, parse};

    const FIXTURE: &str = include_str!("../../forecast-core/tests/fixtures/forecast.json");

    #[test]
    fn forecast_lists_place_now_and_five_days() {
        let model = parse(FIXTURE.as_bytes()).unwrap();
        let text = forecast("Sydney, NSW", &model);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Sydney, NSW (Australia/Sydney)");
        assert_eq!(lines[1], "Now: 24° Clear [sun.max.fill]");
        assert_eq!(lines.len(), 2 + 1 + 5);
        assert!(lines[3].starts_with("Today"));
        assert!(lines[5].starts_with("Fri"));
        assert!(lines[5].contains("Heavy rain"));
    }

    #[test]
    fn missing_slots_render_as_placeholders() {
        let mut model = parse(FIXTURE.as_bytes()).unwrap();
        model.daily.dates.truncate(3);

        let text = forecast("Here", &model);
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("???"));
        assert!(last.contains("Unknown"));
    }

    #[test]
    fn locations_marks_default() {
        let mut config = Config::default();
        config.upsert_location("sydney", Coordinates::new(-33.87, 151.21).unwrap());
        config.upsert_location("hobart", Coordinates::new(-42.88, 147.33).unwrap());

        let text = locations(&config);
        let lines: Vec<_> = text.lines().collect();

        assert!(lines[0].starts_with("  hobart"));
        assert!(lines[1].starts_with("* sydney"));
    }

    #[test]
    fn locations_line_layout() {
        let mut config = Config::default();
        config.upsert_location("home", Coordinates::new(51.5, -0.12).unwrap());

        assert_eq!(locations(&config), "* home               51.5000    -0.1200\n");
    }

    #[test]
    fn no_locations_hint() {
        assert!(locations(&Config::default()).contains("forecast configure"));
    }
}
