//! Output message catalogue
//!
//! Every line the demonstrations print comes from here, so the same domain
//! objects can speak English or Ukrainian.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of the demonstration output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Ukrainian
    Uk,
}

impl Locale {
    pub fn document_line(self, title: &str, content: &str) -> String {
        match self {
            Locale::En => format!("Document: {title} | Content: {content}"),
            Locale::Uk => format!("Документ: {title} | Вміст: {content}"),
        }
    }

    pub fn file_line(self, name: &str) -> String {
        match self {
            Locale::En => format!("File: {name}"),
            Locale::Uk => format!("Файл: {name}"),
        }
    }

    pub fn folder_line(self, name: &str) -> String {
        match self {
            Locale::En => format!("Folder: {name}"),
            Locale::Uk => format!("Папка: {name}"),
        }
    }

    pub fn opening(self) -> &'static str {
        match self {
            Locale::En => "Opening document",
            Locale::Uk => "Відкриття документа",
        }
    }

    pub fn editing_text(self) -> &'static str {
        match self {
            Locale::En => "Editing text document",
            Locale::Uk => "Редагування текстового документа",
        }
    }

    pub fn editing_pdf(self) -> &'static str {
        match self {
            Locale::En => "Editing PDF document",
            Locale::Uk => "Редагування PDF документа",
        }
    }

    pub fn saving(self) -> &'static str {
        match self {
            Locale::En => "Saving document",
            Locale::Uk => "Збереження документа",
        }
    }

    /// Title of the template document used by the prototype demonstration.
    pub fn sample_title(self) -> &'static str {
        match self {
            Locale::En => "Template",
            Locale::Uk => "Шаблон",
        }
    }

    /// Content of the template document used by the prototype demonstration.
    pub fn sample_content(self) -> &'static str {
        match self {
            Locale::En => "Typical text",
            Locale::Uk => "Типовий текст",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Uk => write!(f, "uk"),
        }
    }
}
