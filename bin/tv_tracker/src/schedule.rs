use tracker::library::Library;
use tracker::show_record::ShowRecord;

pub const EMPTY_LIBRARY_TEXT: &str = "No tv shows in collection";

pub fn format_schedule_line(record: &ShowRecord) -> Option<String> {
    let date = record.next_airdate.date()?;
    let episode = record.get_next_episode()?;
    let number = match episode.number {
        Some(number) => number.to_string(),
        None => "?".to_string(),
    };
    Some(format!(
        "{}[{}] - {}: {} (s{}e{})",
        date.format("%Y-%m-%d"), date.format("%A"),
        record.name, episode.name,
        episode.season, number,
    ))
}

pub fn render_schedule(library: &Library) -> Vec<String> {
    if library.is_empty() {
        return vec![EMPTY_LIBRARY_TEXT.to_string()];
    }
    library
        .schedule_view()
        .into_iter()
        .filter_map(format_schedule_line)
        .collect()
}
