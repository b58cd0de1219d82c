use anyhow::*;
use std::fs;
use std::path::PathBuf;

pub mod question;

pub use question::{Answer, Question, RawQuiz};


/// Where quiz documents live: a directory on disk or an HTTP base URL.
/// Quiz names are resolved as `<source>/<name>.json`.
#[derive(Clone, Debug)]
pub enum QuizSource {
    Directory(PathBuf),
    Remote(String),
}

impl QuizSource {
    pub fn from_location(location: &str) -> QuizSource {
        if location.starts_with("http://") || location.starts_with("https://") {
            QuizSource::Remote(location.trim_end_matches('/').to_owned())
        } else {
            QuizSource::Directory(PathBuf::from(location))
        }
    }

    fn read(&self, resource: &str) -> Result<Vec<u8>> {
        match self {
            QuizSource::Directory(directory) => Ok(fs::read(directory.join(resource))?),
            QuizSource::Remote(base_url) => {
                let url = format!("{}/{}", base_url, resource);
                let response = reqwest::blocking::get(url.as_str())?.error_for_status()?;
                Ok(response.bytes()?.to_vec())
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuizDefinition {
    pub title: String,
    pub questions: Vec<Question>,
}

impl QuizDefinition {
    /// Fetches and parses the named quiz. Any failure here is the single
    /// load-error kind the rest of the program knows about.
    pub fn fetch(source: &QuizSource, quiz_name: &str) -> Result<QuizDefinition> {
        let document = source
            .read(&resource_name(quiz_name))
            .with_context(|| format!("Could not read quiz '{}'", quiz_name))?;
        QuizDefinition::parse(&document)
            .with_context(|| format!("Could not parse quiz '{}'", quiz_name))
    }

    pub fn parse(document: &[u8]) -> Result<QuizDefinition> {
        let raw: RawQuiz = serde_json::from_slice(document)?;
        Ok(raw.into())
    }
}

impl From<RawQuiz> for QuizDefinition {
    fn from(raw_quiz: RawQuiz) -> Self {
        QuizDefinition {
            title: raw_quiz.title,
            questions: raw_quiz.questions.into_iter().map(Question::from).collect(),
        }
    }
}

fn resource_name(quiz_name: &str) -> String {
    if quiz_name.ends_with(".json") {
        quiz_name.to_owned()
    } else {
        format!("{}.json", quiz_name)
    }
}
