use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing;
use tracker::app::{App, ShowSource};
use tracker::show_record::ShowMeta;
use crate::command::{MENU_TEXT, MenuCommand, Selection, parse_selection};
use crate::schedule::render_schedule;

// Reads one validated command at a time and hands it to the app
pub struct Menu<R, W> {
    input: R,
    output: W,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, today: NaiveDate) -> Self {
        Self {
            input,
            output,
            today,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // None once input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub async fn run<S: ShowSource>(&mut self, app: &mut App<S>) -> io::Result<()> {
        for name in app.check_updates(self.today).await {
            writeln!(self.output, "Updated {}.", name)?;
        }

        loop {
            writeln!(self.output, "{}", MENU_TEXT)?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return self.quit(app).await,
            };

            match line.parse::<MenuCommand>() {
                Ok(MenuCommand::Search) => self.search(app).await?,
                Ok(MenuCommand::Delete) => self.delete(app)?,
                Ok(MenuCommand::PrintSchedule) => self.print_schedule(app)?,
                Ok(MenuCommand::Quit) => return self.quit(app).await,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    async fn search<S: ShowSource>(&mut self, app: &mut App<S>) -> io::Result<()> {
        writeln!(self.output, "\nSearch for a tv show (leave empty and hit enter to go back): ")?;
        let term = match self.read_line()? {
            Some(term) if !term.is_empty() => term,
            _ => return Ok(()),
        };

        let shows = app.search(term.as_str()).await;
        if shows.is_empty() {
            writeln!(self.output, "No TV shows found")?;
            return Ok(());
        }

        let meta = match self.select_show(shows.as_slice())? {
            Some(meta) => meta,
            None => return Ok(()),
        };

        match app.add_show(meta, self.today).await {
            Ok(record) => writeln!(self.output, "Added {} to library.", record.name)?,
            Err(err) => {
                tracing::warn!(show_id = meta.id.as_str(), "failed to add show: {}", err);
                writeln!(self.output, "Could not add {}: {}", meta.name, err)?;
            },
        }
        Ok(())
    }

    fn select_show<'a>(&mut self, shows: &'a [ShowMeta]) -> io::Result<Option<&'a ShowMeta>> {
        loop {
            writeln!(self.output, "\nTV shows found:")?;
            for (index, show) in shows.iter().enumerate() {
                writeln!(self.output, "{} - {} ({})", index, show.name, show.premiere_date)?;
            }
            writeln!(self.output, "\nChoose TV show to add by index number (leave empty and hit enter to go back):")?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            match parse_selection(line.as_str(), shows.len()) {
                Selection::Back => return Ok(None),
                Selection::Index(index) => return Ok(shows.get(index)),
                Selection::Invalid => writeln!(self.output, "ERROR: No such index exists")?,
            }
        }
    }

    fn delete<S: ShowSource>(&mut self, app: &mut App<S>) -> io::Result<()> {
        if app.get_library().is_empty() {
            writeln!(self.output, "Add some TV shows first...")?;
            return Ok(());
        }

        for record in app.get_library().iter() {
            writeln!(self.output, "ID: {} - {} ({})", record.id, record.name, record.premiere_date)?;
        }
        writeln!(self.output, "\nChoose the show to be deleted with the show's ID (leave empty and hit enter to go back): ")?;

        let id = match self.read_line()? {
            Some(id) => id,
            None => return Ok(()),
        };
        match app.remove_show(id.as_str()) {
            Ok(Some(record)) => writeln!(self.output, "Removed {} from library.", record.name)?,
            Ok(None) => {},
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(())
    }

    fn print_schedule<S: ShowSource>(&mut self, app: &App<S>) -> io::Result<()> {
        writeln!(self.output)?;
        for line in render_schedule(app.get_library()) {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    async fn quit<S: ShowSource>(&mut self, app: &App<S>) -> io::Result<()> {
        match app.save().await {
            Ok(()) => writeln!(self.output, "Successfully written to disk.")?,
            Err(err) => {
                tracing::error!(path = %app.get_snapshot_path().display(), "{}", err);
                writeln!(self.output, "Error writing to disk")?;
            },
        }
        writeln!(self.output, "Exiting...")?;
        self.output.flush()
    }
}
