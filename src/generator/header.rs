//! File header shared by every generated model

use chrono::{DateTime, Local, NaiveDate};

use super::GENERATED_MARKER;
use crate::config::ConfigFile;

/// Values that appear in the header of every generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContext {
    pub project: String,
    pub author: Option<String>,
    pub company: Option<String>,
    /// Package / namespace line for languages that have one
    pub package: Option<String>,
    pub date: NaiveDate,
}

impl HeaderContext {
    /// Create a context dated [`today`]
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            author: None,
            company: None,
            package: None,
            date: today(),
        }
    }

    pub fn from_config(config: &ConfigFile) -> Self {
        Self {
            project: config.project_name(),
            author: config.author.clone(),
            company: config.company.clone(),
            package: config.package.clone(),
            date: today(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// `MM/dd/yy`, as written on the "Created" line
    pub fn date_string(&self) -> String {
        self.date.format("%m/%d/%y").to_string()
    }

    /// Comment block at the top of a generated file, ending with a newline
    pub fn file_header(&self, file_name: &str, comment: &str) -> String {
        let mut lines = vec![
            comment.to_string(),
            format!("{comment}  {file_name}"),
            format!("{comment}  {}", self.project),
            comment.to_string(),
        ];

        match &self.author {
            Some(author) => lines.push(format!(
                "{comment}  Created by {author} on {}.",
                self.date_string()
            )),
            None => lines.push(format!("{comment}  Created on {}.", self.date_string())),
        }
        if let Some(company) = &self.company {
            lines.push(format!(
                "{comment}  Copyright © {} {company}. All rights reserved.",
                self.date.format("%Y")
            ));
        }

        lines.push(comment.to_string());
        lines.push(String::new());
        lines.push("/*".to_string());
        lines.push(format!("    {GENERATED_MARKER}"));
        lines.push("*/".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Whether a line is one of the dated header lines
pub fn is_header_date_line(line: &str) -> bool {
    let text = line.trim_start_matches(|c: char| c == '/' || c == '#' || c.is_whitespace());
    text.starts_with("Created by ") || text.starts_with("Created on ") || text.starts_with("Copyright ©")
}

/// Today's date, or the date of `SOURCE_DATE_EPOCH` when set
pub fn today() -> NaiveDate {
    std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|epoch| epoch.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map_or_else(|| Local::now().date_naive(), |dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 1, 4).unwrap()
    }

    #[test]
    fn test_file_header_with_author_and_company() {
        let context = HeaderContext::new("ModelSynchro")
            .with_author("Jonathan Samudio")
            .with_company("Prolific Interactive")
            .with_date(date());

        let header = context.file_header("Rating.h", "//");
        assert_eq!(
            header,
            "//\n//  Rating.h\n//  ModelSynchro\n//\n\
             //  Created by Jonathan Samudio on 01/04/18.\n\
             //  Copyright © 2018 Prolific Interactive. All rights reserved.\n//\n\n\
             /*\n    Auto-Generated using modelsync\n*/\n"
        );
    }

    #[test]
    fn test_file_header_without_author() {
        let context = HeaderContext::new("Shop").with_date(date());
        let header = context.file_header("Rating.swift", "//");
        assert!(header.contains("//  Created on 01/04/18."));
        assert!(!header.contains("Copyright"));
    }

    #[test]
    fn test_header_date_lines() {
        assert!(is_header_date_line("//  Created by Jonathan Samudio on 01/04/18."));
        assert!(is_header_date_line("//  Created on 01/04/18."));
        assert!(is_header_date_line("//  Copyright © 2018 Prolific Interactive. All rights reserved."));
        assert!(!is_header_date_line("    let created: String"));
        assert!(!is_header_date_line("//  Rating.swift"));
    }

    #[test]
    fn test_date_string() {
        let context = HeaderContext::new("Shop").with_date(date());
        assert_eq!(context.date_string(), "01/04/18");
    }
}
