//! Per-invocation result store.
//!
//! Every analysis, comparison and ranking is stored in wire form and read
//! back before it is rendered, so what the user sees is exactly what a
//! transport consumer would decode.

use anyhow::{Context, anyhow};
use clausewise_core::{
    AnalysisResult, ComparisonEnhancement, ComparisonResult, Enhancement, MultiCompareResult,
};
use clausewise_store::{DEFAULT_CAPACITY, ResultCache};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::input::Input;

pub struct Session {
    cache: ResultCache,
}

impl Session {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            cache: ResultCache::new(DEFAULT_CAPACITY)?,
        })
    }

    #[cfg(test)]
    fn with_keys(keys: Box<dyn clausewise_store::KeyStrategy>) -> anyhow::Result<Self> {
        Ok(Self {
            cache: ResultCache::with_key_strategy(DEFAULT_CAPACITY, keys)?,
        })
    }

    /// Analyse one document and store the result.
    pub fn analyze(&mut self, input: &Input) -> anyhow::Result<String> {
        let result = clausewise_analyzer::analyze(&input.text)
            .with_context(|| format!("analysing {}", input.name))?;
        info!(
            name = %input.name,
            document_type = %result.document_type,
            risk_score = result.risk_score,
            "analysed"
        );
        Ok(self.cache.put(&result)?)
    }

    pub fn analysis(&self, key: &str) -> anyhow::Result<AnalysisResult> {
        self.fetch(key)
    }

    pub fn compare(&mut self, left: &Input, right: &Input) -> anyhow::Result<String> {
        let l = self.analyze(left)?;
        let r = self.analyze(right)?;
        let result = clausewise_analyzer::compare(
            &self.analysis(&l)?,
            &self.analysis(&r)?,
            &left.name,
            &right.name,
        );
        Ok(self.cache.put(&result)?)
    }

    pub fn comparison(&self, key: &str) -> anyhow::Result<ComparisonResult> {
        self.fetch(key)
    }

    pub fn rank(&mut self, inputs: &[Input]) -> anyhow::Result<String> {
        let mut analysed = Vec::with_capacity(inputs.len());
        for input in inputs {
            let key = self.analyze(input)?;
            analysed.push((input.name.clone(), self.analysis(&key)?));
        }
        let result = clausewise_analyzer::multi_compare(&analysed)?;
        info!(winner = %result.winner_name, documents = analysed.len(), "ranked");
        Ok(self.cache.put(&result)?)
    }

    pub fn ranking(&self, key: &str) -> anyhow::Result<MultiCompareResult> {
        self.fetch(key)
    }

    pub fn attach_opinion(
        &mut self,
        key: &str,
        enhancement: ComparisonEnhancement,
    ) -> anyhow::Result<()> {
        let enhanced = self.comparison(key)?.with_enhancement(enhancement);
        self.replace(key, &enhanced)
    }

    pub fn attach_pick(&mut self, key: &str, enhancement: Enhancement) -> anyhow::Result<()> {
        let enhanced = self.ranking(key)?.with_enhancement(enhancement);
        self.replace(key, &enhanced)
    }

    /// Raw wire form of a stored result.
    pub fn value(&self, key: &str) -> anyhow::Result<&Value> {
        self.cache
            .get_value(key)
            .ok_or_else(|| anyhow!("no stored result for key {key}"))
    }

    fn fetch<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<T> {
        self.cache
            .get(key)?
            .ok_or_else(|| anyhow!("no stored result for key {key}"))
    }

    fn replace<T: Serialize>(&mut self, key: &str, value: &T) -> anyhow::Result<()> {
        if !self.cache.update(key, value)? {
            return Err(anyhow!("no stored result for key {key}"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clausewise_core::Side;
    use clausewise_store::SequentialKeys;

    use super::*;

    const FAIR: &str = "You may cancel at any time from your account settings. \
        We offer a full refund within 30 days of purchase for any reason.";
    const HARSH: &str = "All sales are final and there are no refunds under any circumstances. \
        Any dispute will be resolved by binding arbitration and you waive your right to a class action.";

    fn session() -> Session {
        Session::with_keys(Box::new(SequentialKeys::new("t"))).unwrap()
    }

    fn input(name: &str, text: &str) -> Input {
        Input::new(name, text.to_string()).unwrap()
    }

    #[test]
    fn analysis_survives_the_store() {
        let mut s = session();
        let key = s.analyze(&input("fair", FAIR)).unwrap();
        assert_eq!(key, "t-1");
        let stored = s.analysis(&key).unwrap();
        assert_eq!(stored, clausewise_analyzer::analyze(FAIR).unwrap());
    }

    #[test]
    fn compare_prefers_fair_terms() {
        let mut s = session();
        let key = s.compare(&input("fair", FAIR), &input("harsh", HARSH)).unwrap();
        let result = s.comparison(&key).unwrap();
        assert_eq!(result.overall_winner, Side::Left);
        assert_eq!(result.winner_name(), Some("fair"));
    }

    #[test]
    fn rank_then_attach_pick() {
        let mut s = session();
        let key = s.rank(&[input("harsh", HARSH), input("fair", FAIR)]).unwrap();
        assert_eq!(s.ranking(&key).unwrap().winner_name, "fair");

        s.attach_pick(
            &key,
            Enhancement {
                pick: "Sign fair.".into(),
                model: "llama3.2".into(),
                enhanced: true,
            },
        )
        .unwrap();
        let value = s.value(&key).unwrap();
        assert_eq!(value["llm_pick"], "Sign fair.");
        assert_eq!(value["winner_name"], "fair");
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!(session().analysis("missing").is_err());
    }
}
