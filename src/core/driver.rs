use crate::domain::model::{Greeter, Person};
use crate::utils::error::Result;
use std::io::Write;

pub const DEFAULT_MESSAGE: &str = "Kumanu";

/// Start-up sequence: one greeting line, then one line per person.
#[derive(Debug, Clone)]
pub struct GreetingDriver {
    greeter: Greeter,
    people: Vec<Person>,
}

impl GreetingDriver {
    pub fn new(greeter: Greeter, people: Vec<Person>) -> Self {
        Self { greeter, people }
    }

    pub fn greeter(&self) -> &Greeter {
        &self.greeter
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// 依序寫出問候，回傳寫出的行數
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        tracing::debug!("Greeting with message {:?}", self.greeter.greeting);

        writeln!(out, "{}", self.greeter.greet())?;
        let mut lines = 1;

        for person in &self.people {
            tracing::debug!("Greeting {} {}", person.first_name, person.last_name);
            writeln!(out, "{}", self.greeter.greet_person(person))?;
            lines += 1;
        }

        out.flush()?;
        tracing::info!("✅ Wrote {} greeting line(s)", lines);
        Ok(lines)
    }
}

impl Default for GreetingDriver {
    fn default() -> Self {
        Self::new(
            Greeter::new(DEFAULT_MESSAGE),
            vec![Person::new("Mike", "B")],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GreeterError;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_run_output() {
        let mut out = Vec::new();
        let lines = GreetingDriver::default().run(&mut out).unwrap();

        assert_eq!(lines, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, Kumanu\nHello, Mike B\n");
    }

    #[test]
    fn test_run_without_people() {
        let mut out = Vec::new();
        let driver = GreetingDriver::new(Greeter::new("there"), vec![]);

        assert_eq!(driver.run(&mut out).unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, there\n");
    }

    #[test]
    fn test_run_preserves_person_order() {
        let mut out = Vec::new();
        let driver = GreetingDriver::new(
            Greeter::new("Kumanu"),
            vec![Person::new("Ada", "L"), Person::new("Mike", "B")],
        );

        driver.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello, Kumanu\nHello, Ada L\nHello, Mike B\n"
        );
    }

    #[test]
    fn test_run_propagates_write_errors() {
        let result = GreetingDriver::default().run(&mut FailingWriter);
        assert!(matches!(result, Err(GreeterError::IoError(_))));
    }
}
