//! Flag parsing for create/update commands

/// Record fields collected from --name/--marks/--grade/--course flags
#[derive(Debug, Default)]
pub struct RecordOptions {
    pub name: Option<String>,
    pub marks: Option<f64>,
    pub grade: Option<String>,
    pub course: Option<String>,
}

impl RecordOptions {
    /// Parse flag pairs from the remaining argv
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut opts = RecordOptions::default();
        let mut i = 0;

        while i < args.len() {
            let flag = args[i].as_str();
            let value = args
                .get(i + 1)
                .ok_or_else(|| format!("missing value for {}", flag))?;

            match flag {
                "--name" => opts.name = Some(value.clone()),
                "--marks" => {
                    opts.marks = Some(
                        value
                            .parse()
                            .map_err(|_| format!("invalid marks: {}", value))?,
                    )
                }
                "--grade" => opts.grade = Some(value.clone()),
                "--course" => opts.course = Some(value.clone()),
                _ => return Err(format!("unknown flag: {}", flag)),
            }

            i += 2;
        }

        Ok(opts)
    }

    /// Consume the options, requiring every field to be present
    pub fn require_all(self) -> Result<(String, f64, String, String), String> {
        Ok((
            self.name.ok_or_else(|| "missing --name".to_string())?,
            self.marks.ok_or_else(|| "missing --marks".to_string())?,
            self.grade.ok_or_else(|| "missing --grade".to_string())?,
            self.course.ok_or_else(|| "missing --course".to_string())?,
        ))
    }
}
