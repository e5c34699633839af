//! Interactive menu loop: city selection, reports, filters and row paging.
//!
//! All console I/O goes through [`Console`], which is generic over its input
//! and output so scripted sessions can be driven from tests. Every prompt
//! answer is checked by a pure `parse_*` function; invalid answers re-prompt.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::calendar::{MONTH_NAMES, WEEKDAYS, weekday_name};
use crate::dataset::{City, Dataset, load_city};
use crate::error::{ExplorerError, InvalidSelection, Result};
use crate::filter::{FilterState, apply, parse_month_choice, parse_weekday_choice};
use crate::output::{OutputFormat, write_report, write_rows};
use crate::pager::{RowPager, parse_yes_no, wants_more};
use crate::reports::{Report, popular_stations, popular_times, trip_duration, user_info};

const INVALID_CHOICE: &str = "Invalid input. Please choose again.";

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub data_dir: PathBuf,
    /// Skips the city prompt when set.
    pub city: Option<City>,
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            city: None,
            format: OutputFormat::Text,
        }
    }
}

/// The four summary views offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    PopularTimes,
    PopularStations,
    TripDuration,
    UserInfo,
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Report(ReportKind),
    ViewRows,
    FilterMonth,
    FilterWeekday,
    Quit,
}

pub fn parse_menu_choice(raw: &str) -> std::result::Result<MenuChoice, InvalidSelection> {
    match raw.trim() {
        "1" => Ok(MenuChoice::Report(ReportKind::PopularTimes)),
        "2" => Ok(MenuChoice::Report(ReportKind::PopularStations)),
        "3" => Ok(MenuChoice::Report(ReportKind::TripDuration)),
        "4" => Ok(MenuChoice::Report(ReportKind::UserInfo)),
        "5" => Ok(MenuChoice::ViewRows),
        "6" => Ok(MenuChoice::FilterMonth),
        "7" => Ok(MenuChoice::FilterWeekday),
        q if q.eq_ignore_ascii_case("q") => Ok(MenuChoice::Quit),
        _ => Err(InvalidSelection::new(raw)),
    }
}

/// Parses a city menu answer, `"1"`..`"3"`.
pub fn parse_city_choice(raw: &str) -> std::result::Result<City, InvalidSelection> {
    match raw.trim() {
        "1" => Ok(City::ALL[0]),
        "2" => Ok(City::ALL[1]),
        "3" => Ok(City::ALL[2]),
        _ => Err(InvalidSelection::new(raw)),
    }
}

/// Line-oriented prompt/response over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `text` and returns the next input line, trimmed.
    ///
    /// # Errors
    ///
    /// [`ExplorerError::InputClosed`] once the input is exhausted.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        // undecodable bytes become U+FFFD and fail validation like any typo
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ExplorerError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Prompts until `parse` accepts the answer, printing `retry` after each rejection.
    pub fn choose<T>(
        &mut self,
        text: &str,
        retry: &str,
        parse: impl Fn(&str) -> std::result::Result<T, InvalidSelection>,
    ) -> Result<T> {
        loop {
            let answer = self.prompt(text)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "Rejected answer");
                    self.say(retry)?;
                }
            }
        }
    }
}

/// Asks for a city until a valid number is entered.
pub fn select_city<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<City> {
    loop {
        console.say("\nSelect a city:")?;
        for (i, city) in City::ALL.iter().enumerate() {
            console.say(&format!("{}. {}", i + 1, city.name()))?;
        }
        let answer = console.prompt("Enter the number of the desired city: ")?;
        match parse_city_choice(&answer) {
            Ok(city) => return Ok(city),
            Err(_) => console.say(INVALID_CHOICE)?,
        }
    }
}

/// Filter state and the loaded dataset for one city.
pub struct Session {
    dataset: Dataset,
    filters: FilterState,
    format: OutputFormat,
}

impl Session {
    pub fn new(dataset: Dataset, format: OutputFormat) -> Self {
        Self {
            dataset,
            filters: FilterState::default(),
            format,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Computes one of the four summary views against the current filters.
    pub fn report(&self, kind: ReportKind) -> Report {
        let view = apply(&self.dataset, &self.filters);
        match kind {
            ReportKind::PopularTimes => Report::PopularTimes(popular_times(&view)),
            ReportKind::PopularStations => Report::PopularStations(popular_stations(&view)),
            ReportKind::TripDuration => Report::TripDuration(trip_duration(&view)),
            ReportKind::UserInfo => Report::UserInfo(user_info(&view, &self.dataset.schema)),
        }
    }

    /// Runs the main menu until the user quits.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            self.show_menu(console)?;
            let answer = console.prompt("Enter the number of the desired option: ")?;

            let choice = match parse_menu_choice(&answer) {
                Ok(choice) => choice,
                Err(_) => {
                    console.say("Invalid selection. Please choose again.")?;
                    continue;
                }
            };
            debug!(?choice, "Menu selection");

            match choice {
                MenuChoice::Quit => {
                    console.say("Exiting the program.")?;
                    info!(city = %self.dataset.city, "Session ended");
                    return Ok(());
                }
                MenuChoice::ViewRows => self.page_rows(console)?,
                MenuChoice::FilterMonth => self.select_month(console)?,
                MenuChoice::FilterWeekday => self.select_weekday(console)?,
                MenuChoice::Report(kind) => {
                    let report = self.report(kind);
                    write_report(console.output(), &report, self.format)?;
                }
            }
        }
    }

    fn show_menu<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.say(&format!("\nSelect an option for ({}):", self.dataset.city))?;
        console.say("1. Popular times of travel")?;
        console.say("2. Popular stations and trip")?;
        console.say("3. Trip duration")?;
        console.say("4. User info")?;
        console.say("5. Display individual trip data")?;
        console.say(&format!("6. Filter by month ({})", self.filters.month_label()))?;
        console.say(&format!("7. Filter by weekday ({})", self.filters.weekday_label()))?;
        console.say("q. Quit the program")?;
        Ok(())
    }

    fn select_month<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        console.say("\nSelect a month:")?;
        console.say("0. ALL")?;
        for (i, name) in MONTH_NAMES.iter().enumerate() {
            console.say(&format!("{}. {}", i + 1, name))?;
        }

        let month = console.choose(
            "Enter the number of the desired month: ",
            INVALID_CHOICE,
            parse_month_choice,
        )?;
        self.filters.set_month(month);
        info!(month = ?month, "Month filter changed");
        Ok(())
    }

    fn select_weekday<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.say("\nSelect a weekday:")?;
        console.say("0. ALL")?;
        for (i, day) in WEEKDAYS.iter().enumerate() {
            console.say(&format!("{}. {}", i + 1, weekday_name(*day)))?;
        }

        let weekday = console.choose(
            "Enter the number of the desired weekday: ",
            INVALID_CHOICE,
            parse_weekday_choice,
        )?;
        self.filters.set_weekday(weekday);
        info!(weekday = ?weekday, "Weekday filter changed");
        Ok(())
    }

    /// Blocking paging sub-loop. Filters cannot change until it returns.
    fn page_rows<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let start = console.choose(
            "\nWould you like to view 5 rows of individual trip data? Enter yes or no\n",
            "Invalid input. Please enter 'yes' or 'no'.",
            parse_yes_no,
        )?;
        if !start {
            return Ok(());
        }

        let mut pager = RowPager::new();
        loop {
            let page = pager.next_page(&self.dataset, &self.filters);
            write_rows(console.output(), &page, &self.dataset.schema)?;

            let answer = console.prompt("Do you wish to continue? Enter yes or no: ")?;
            if !wants_more(&answer) {
                return Ok(());
            }
        }
    }
}

/// Runs a whole session: city selection, loading, then the main menu.
///
/// A missing city file is reported to the user by city name and ends the
/// session normally, as does closed input.
pub fn run<R: BufRead, W: Write>(config: &SessionConfig, console: &mut Console<R, W>) -> Result<()> {
    let result = run_inner(config, console);
    match result {
        Err(ExplorerError::InputClosed) => {
            info!("Input closed, ending session");
            Ok(())
        }
        Err(e @ ExplorerError::DataNotFound { .. }) => {
            error!(error = %e, "City data unavailable");
            console.say(&e.to_string())?;
            Ok(())
        }
        other => other,
    }
}

fn run_inner<R: BufRead, W: Write>(
    config: &SessionConfig,
    console: &mut Console<R, W>,
) -> Result<()> {
    let city = match config.city {
        Some(city) => city,
        None => select_city(console)?,
    };
    info!(city = city.name(), "City selected");

    let dataset = load_city(&config.data_dir, city.name())?;
    let mut session = Session::new(dataset, config.format);
    session.run(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::read_trips;
    use std::io::Cursor;

    const TRIPS: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-03-07 08:00:00,60,A,B,Subscriber
2017-04-04 09:00:00,60,A,B,Customer
";

    fn session() -> Session {
        Session::new(
            read_trips("Chicago", TRIPS.as_bytes()).unwrap(),
            OutputFormat::Text,
        )
    }

    fn script(lines: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(lines.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(
            parse_menu_choice("1"),
            Ok(MenuChoice::Report(ReportKind::PopularTimes))
        );
        assert_eq!(
            parse_menu_choice("4"),
            Ok(MenuChoice::Report(ReportKind::UserInfo))
        );
        assert_eq!(parse_menu_choice("7"), Ok(MenuChoice::FilterWeekday));
        assert_eq!(parse_menu_choice("q"), Ok(MenuChoice::Quit));
        assert_eq!(parse_menu_choice("Q"), Ok(MenuChoice::Quit));
        assert!(parse_menu_choice("8").is_err());
        assert!(parse_menu_choice("quit").is_err());
    }

    #[test]
    fn test_parse_city_choice() {
        assert_eq!(parse_city_choice("2"), Ok(City::NewYorkCity));
        assert!(parse_city_choice("Chicago").is_err());
        assert!(parse_city_choice("4").is_err());
    }

    #[test]
    fn test_prompt_eof_is_input_closed() {
        let mut console = script("");
        assert!(matches!(console.prompt("> "), Err(ExplorerError::InputClosed)));
    }

    #[test]
    fn test_choose_retries_until_valid() {
        let mut console = script("13\nabc\n4\n");
        let month = console
            .choose("month? ", INVALID_CHOICE, parse_month_choice)
            .unwrap();

        assert_eq!(month, Some(4));
        assert_eq!(transcript(console).matches(INVALID_CHOICE).count(), 2);
    }

    #[test]
    fn test_select_city_retries() {
        let mut console = script("9\n3\n");
        assert_eq!(select_city(&mut console).unwrap(), City::Washington);
    }

    #[test]
    fn test_invalid_menu_option_stays_in_menu() {
        let mut session = session();
        let mut console = script("x\nq\n");
        session.run(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("Invalid selection. Please choose again."));
        assert_eq!(out.matches("Select an option for (Chicago):").count(), 2);
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_filter_selection_updates_menu_labels() {
        let mut session = session();
        let mut console = script("6\n3\n7\n3\nq\n");
        session.run(&mut console).unwrap();

        assert_eq!(session.filters().month, Some(3));
        assert_eq!(session.filters().weekday, Some(chrono::Weekday::Tue));
        let out = transcript(console);
        assert!(out.contains("6. Filter by month (MAR)"));
        assert!(out.contains("7. Filter by weekday (TUE)"));
    }

    #[test]
    fn test_report_respects_filters() {
        let mut session = session();
        session.filters_mut().set_month(Some(4));

        match session.report(ReportKind::UserInfo) {
            Report::UserInfo(info) => {
                assert_eq!(info.user_types.len(), 1);
                assert_eq!(info.user_types[0].label, "Customer");
            }
            other => panic!("unexpected report {:?}", other),
        }
        assert!(matches!(
            session.report(ReportKind::TripDuration),
            Report::TripDuration(_)
        ));
    }

    #[test]
    fn test_undecodable_input_reprompts() {
        let mut session = session();
        let mut console = Console::new(Cursor::new(b"\xff\xfe\nq\n".to_vec()), Vec::new());
        session.run(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("Invalid selection. Please choose again."));
        assert_eq!(out.matches("Select an option for (Chicago):").count(), 2);
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_prompt_decodes_lossily() {
        let mut console = Console::new(Cursor::new(b"ye\xffs\n".to_vec()), Vec::new());
        let answer = console.prompt("> ").unwrap();
        assert_eq!(answer, "ye\u{fffd}s");
        assert!(parse_yes_no(&answer).is_err());
    }

    #[test]
    fn test_paging_declined() {
        let session = session();
        let mut console = script("maybe\nno\n");
        session.page_rows(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("Invalid input. Please enter 'yes' or 'no'."));
        assert!(!out.contains("[0]"));
    }

    #[test]
    fn test_paging_shows_rows_then_stops() {
        let session = session();
        let mut console = script("YES\nyes\nnope\n");
        session.page_rows(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("[0] 2017-03-07 08:00:00"));
        assert!(out.contains("[1] 2017-04-04 09:00:00"));
        assert!(out.contains("No more trip data to display."));
    }

    #[test]
    fn test_run_reports_missing_city_by_name() {
        let config = SessionConfig {
            data_dir: std::env::temp_dir().join("bikeshare_explorer_no_such_dir"),
            city: None,
            format: OutputFormat::Text,
        };
        let mut console = script("2\n");
        run(&config, &mut console).unwrap();

        let out = transcript(console);
        assert!(out.ends_with("Data for New York City could not be found.\n"));
    }

    #[test]
    fn test_run_ends_cleanly_on_closed_input() {
        let config = SessionConfig::default();
        let mut console = script("");
        assert!(run(&config, &mut console).is_ok());
    }
}
