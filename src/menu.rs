use std::fmt;
use std::io::{BufRead, ErrorKind, Write};

/// A fixed set of numbered choices presented to the user
pub trait MenuOption: Sized + Copy + 'static {
    /// All options in menu order, option n is at index n - 1
    const OPTIONS: &'static [Self];
    const HEADING: &'static str;
    const INVALID_INPUT: &'static str;

    fn label(&self) -> &'static str;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum City {
    Townsville,
    Sydney,
    Melbourne,
    Brisbane,
    Adelaide,
}

impl City {
    pub fn name(&self) -> &'static str {
        match self {
            City::Townsville => "Townsville",
            City::Sydney => "Sydney",
            City::Melbourne => "Melbourne",
            City::Brisbane => "Brisbane",
            City::Adelaide => "Adelaide",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl MenuOption for City {
    const OPTIONS: &'static [Self] = &[
        City::Townsville,
        City::Sydney,
        City::Melbourne,
        City::Brisbane,
        City::Adelaide,
    ];
    const HEADING: &'static str = "Select a city by entering the corresponding number:";
    const INVALID_INPUT: &'static str = "Invalid input, please enter a number between 1 and 5.";

    fn label(&self) -> &'static str {
        self.name()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChartKind {
    CombinedScatter,
    Bars,
    TemperatureScatter,
}

impl MenuOption for ChartKind {
    const OPTIONS: &'static [Self] = &[
        ChartKind::CombinedScatter,
        ChartKind::Bars,
        ChartKind::TemperatureScatter,
    ];
    const HEADING: &'static str = "Select the type of graph you want to generate:";
    const INVALID_INPUT: &'static str = "Invalid input, please enter 1, 2, or 3.";

    fn label(&self) -> &'static str {
        match self {
            ChartKind::CombinedScatter => "One Scatter Plot with Temperature, Humidity and Wind speed combined",
            ChartKind::Bars => "Three Bar Charts (Temperature, Humidity, Wind Speed)",
            ChartKind::TemperatureScatter => "Scatter Plot with Temperature Only",
        }
    }
}

/// Reason a menu answer was rejected
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionError {
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::NotANumber(s) => write!(f, "SelectionError::NotANumber: '{}'", s),
            SelectionError::OutOfRange(n) => write!(f, "SelectionError::OutOfRange: {}", n),
        }
    }
}

/// Validates one line of user input against a menu
///
/// # Arguments
///
/// * 'raw' - the line as typed, surrounding whitespace is ignored
pub fn parse_choice<T: MenuOption>(raw: &str) -> Result<T, SelectionError> {
    let trimmed = raw.trim();
    let number: i64 = trimmed.parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    if number < 1 || number as usize > T::OPTIONS.len() {
        return Err(SelectionError::OutOfRange(number));
    }

    Ok(T::OPTIONS[number as usize - 1])
}

/// Presents a menu and keeps asking until a valid choice is entered
///
/// There is no retry limit, only end of input stops the loop.
///
/// # Arguments
///
/// * 'input' - where answers are read from
/// * 'output' - where the menu and diagnostics are written
pub fn select<T: MenuOption, R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<T> {
    writeln!(output, "{}", T::HEADING)?;
    for (i, option) in T::OPTIONS.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, option.label())?;
    }

    loop {
        write!(output, "Enter the number of your choice: ")?;
        output.flush()?;

        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input closed before a valid choice was made"));
        }

        match parse_choice::<T>(&String::from_utf8_lossy(&line)) {
            Ok(choice) => return Ok(choice),
            Err(_) => writeln!(output, "{}", T::INVALID_INPUT)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn every_city_number_maps_to_its_city() {
        let expected = [
            ("1", City::Townsville),
            ("2", City::Sydney),
            ("3", City::Melbourne),
            ("4", City::Brisbane),
            ("5", City::Adelaide),
        ];
        for (raw, city) in expected {
            assert_eq!(parse_choice::<City>(raw), Ok(city));
        }
    }

    #[test]
    fn every_chart_number_maps_to_its_kind() {
        assert_eq!(parse_choice::<ChartKind>("1"), Ok(ChartKind::CombinedScatter));
        assert_eq!(parse_choice::<ChartKind>("2"), Ok(ChartKind::Bars));
        assert_eq!(parse_choice::<ChartKind>("3\n"), Ok(ChartKind::TemperatureScatter));
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        for n in [-1, 0, 6, 100, i64::MAX] {
            assert_eq!(parse_choice::<City>(&n.to_string()), Err(SelectionError::OutOfRange(n)));
        }
        assert_eq!(parse_choice::<ChartKind>("4"), Err(SelectionError::OutOfRange(4)));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        for raw in ["", "abc", "2.5", "one", "1 2"] {
            assert!(matches!(parse_choice::<City>(raw), Err(SelectionError::NotANumber(_))));
        }
    }

    #[test]
    fn select_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n7\n\n2\n");
        let mut output: Vec<u8> = Vec::new();

        let city: City = select(&mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(city, City::Sydney);
        assert!(text.starts_with(City::HEADING));
        assert!(text.contains("5. Adelaide"));
        assert_eq!(text.matches(City::INVALID_INPUT).count(), 3);
    }

    #[test]
    fn select_reprompts_on_undecodable_input() {
        let mut input = Cursor::new(b"\xff\xfe\n2\n".to_vec());
        let mut output: Vec<u8> = Vec::new();

        let city: City = select(&mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(city, City::Sydney);
        assert_eq!(text.matches(City::INVALID_INPUT).count(), 1);
    }

    #[test]
    fn select_fails_on_closed_input() {
        let mut input = Cursor::new("9\n");
        let mut output: Vec<u8> = Vec::new();

        let err = select::<ChartKind, _, _>(&mut input, &mut output).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
