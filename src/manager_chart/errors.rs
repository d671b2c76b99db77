use std::fmt;
use std::fmt::Formatter;
use plotters::drawing::DrawingAreaErrorKind;

#[derive(Debug)]
pub struct ChartError(pub String);

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ChartError: {}", self.0)
    }
}
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self { ChartError(e.to_string()) }
}
impl From<&str> for ChartError {
    fn from(e: &str) -> Self { ChartError(e.to_string()) }
}
