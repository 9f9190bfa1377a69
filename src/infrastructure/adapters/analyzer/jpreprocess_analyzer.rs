//! JPreprocess Analyzer - 形態素解析アダプタ
//!
//! jpreprocess で NAIST-jdic 系辞書を引き、テキストを HTS
//! フルコンテキストラベル列へ変換する。ユーザー辞書は CSV から
//! 解析器ごと新規構築する（既存インスタンスへの追記はしない）。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use jpreprocess::{DefaultTokenizer, JPreprocess, JPreprocessConfig, SystemDictionaryConfig};

use crate::application::ports::{AnalyzerError, AnalyzerFactoryPort, TextAnalyzerPort};

/// jpreprocess による解析器
pub struct JPreprocessAnalyzer {
    inner: JPreprocess<DefaultTokenizer>,
}

impl TextAnalyzerPort for JPreprocessAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        let labels = self
            .inner
            .extract_fullcontext(text)
            .map_err(|e| AnalyzerError::AnalysisFailed(e.to_string()))?;
        Ok(labels.iter().map(|label| label.to_string()).collect())
    }
}

/// システム辞書ディレクトリを基点に解析器を構築するファクトリ
pub struct JPreprocessAnalyzerFactory {
    system_dict_dir: PathBuf,
}

impl JPreprocessAnalyzerFactory {
    pub fn new(system_dict_dir: impl Into<PathBuf>) -> Self {
        Self {
            system_dict_dir: system_dict_dir.into(),
        }
    }
}

impl AnalyzerFactoryPort for JPreprocessAnalyzerFactory {
    fn build(
        &self,
        user_dict_csv: Option<&Path>,
    ) -> Result<Arc<dyn TextAnalyzerPort>, AnalyzerError> {
        if !self.system_dict_dir.is_dir() {
            return Err(AnalyzerError::DictionaryLoad(format!(
                "システム辞書ディレクトリがありません: {}",
                self.system_dict_dir.display()
            )));
        }

        let config = JPreprocessConfig {
            dictionary: SystemDictionaryConfig::File(self.system_dict_dir.clone()),
            user_dictionary: user_dict_csv
                .map(|path| serde_json::json!({ "path": path, "kind": "ipadic" })),
        };
        let inner = JPreprocess::from_config(config)
            .map_err(|e| AnalyzerError::DictionaryLoad(e.to_string()))?;

        tracing::info!(
            system_dict = %self.system_dict_dir.display(),
            user_dict = user_dict_csv.is_some(),
            "解析器を構築"
        );
        Ok(Arc::new(JPreprocessAnalyzer { inner }))
    }
}
