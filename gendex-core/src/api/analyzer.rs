//! Analyzer facade tying tokenizer, lexicon and aggregator together

use std::sync::Arc;

use crate::aggregator::aggregate;
use crate::api::{Config, Input};
use crate::error::Result;
use crate::language::{get_rules, LanguageRules};
use crate::lexicon::Lexicon;
use crate::report::Report;
use crate::tokenizer::{Sentence, Tokenizer};

/// Reusable text analyzer
///
/// Cheap to share across threads; all state is immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct GenderAnalyzer {
    tokenizer: Tokenizer,
    lexicon: Arc<Lexicon>,
    config: Config,
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl GenderAnalyzer {
    /// Analyzer with English rules and the built-in word lists
    pub fn new() -> Self {
        Self::from_parts(
            Tokenizer::default(),
            Arc::new(Lexicon::builtin().clone()),
            Config::default(),
        )
    }

    /// Create an analyzer from a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let rules = get_rules(config.language())?;
        let mut analyzer = Self::from_parts(
            Tokenizer::new(rules),
            Arc::new(Lexicon::builtin().clone()),
            config,
        );

        #[cfg(feature = "parallel")]
        if let Some(threads) = analyzer.config.threads {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| {
                    crate::Error::Configuration(format!("Failed to build thread pool: {e}"))
                })?;
            analyzer.pool = Some(Arc::new(pool));
        }

        Ok(analyzer)
    }

    /// Replace the segmentation rules (e.g. loaded from a TOML file)
    pub fn with_rules(mut self, rules: Arc<dyn LanguageRules>) -> Self {
        self.tokenizer = Tokenizer::new(rules);
        self
    }

    /// Replace the word lists
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Arc::new(lexicon);
        self
    }

    fn from_parts(tokenizer: Tokenizer, lexicon: Arc<Lexicon>, config: Config) -> Self {
        Self {
            tokenizer,
            lexicon,
            config,
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Analyze one text. Never fails.
    pub fn analyze(&self, text: &str) -> Report {
        self.analyze_sentences(text.len(), &self.tokenizer.tokenize(text))
    }

    /// Read an input fully and analyze it.
    ///
    /// Only reading can fail; undecodable bytes produce the empty report.
    pub fn analyze_input(&self, input: Input) -> Result<Report> {
        let bytes = input.into_bytes()?;
        let sentences = self.tokenizer.tokenize_bytes(&bytes);
        Ok(self.analyze_sentences(bytes.len(), &sentences))
    }

    fn analyze_sentences(&self, len: usize, sentences: &[Sentence]) -> Report {
        let report = aggregate(sentences, &self.lexicon);
        log::debug!(
            "Analyzed {len} bytes: {} sentences, {} words",
            report.total_sentences(),
            report.total_words()
        );
        report
    }

    /// Analyze independent texts, keeping input order
    #[cfg(feature = "parallel")]
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Report>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let run = || {
            texts
                .par_iter()
                .map(|text| self.analyze(text.as_ref()))
                .collect()
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    /// Analyze independent texts, keeping input order
    #[cfg(not(feature = "parallel"))]
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Report>
    where
        S: AsRef<str> + Sync,
    {
        texts.iter().map(|text| self.analyze(text.as_ref())).collect()
    }
}

impl Default for GenderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
