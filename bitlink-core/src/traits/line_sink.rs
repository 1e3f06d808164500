//! Outbound side of the line transport

/// Accepts complete outbound lines
///
/// Implementations add the line terminator; callers pass the text only.
#[allow(async_fn_in_trait)]
pub trait LineSink {
    /// Transport error type
    type Error;

    /// Write one line to the link
    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

impl<T: LineSink> LineSink for &mut T {
    type Error = T::Error;

    async fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        T::write_line(self, line).await
    }
}
