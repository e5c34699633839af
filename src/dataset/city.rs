use clap::ValueEnum;

/// Cities with a published trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Cities in menu order; selection `n` maps to `ALL[n - 1]`.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    pub fn file_name(&self) -> String {
        city_file_name(self.name())
    }
}

/// Lower-cases the name, replaces spaces with underscores and appends `.csv`.
pub fn city_file_name(city: &str) -> String {
    format!("{}.csv", city.to_lowercase().replace(' ', "_"))
}
