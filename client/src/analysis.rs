//! Team analysis backend client

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{AnalyzerClient, ClientError};

/// One strength, weakness, or threat observation from the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPoint {
    pub point: String,
    pub reasoning: String,
}

/// A suggested change to the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub priority: String,
}

/// Graded analysis of a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalysis {
    /// Letter grade A-F
    pub grade: String,
    pub strengths: Vec<AnalysisPoint>,
    pub weaknesses: Vec<AnalysisPoint>,
    pub threats: Vec<AnalysisPoint>,
    pub suggestions: Vec<Suggestion>,

    /// Set when the result is a degraded placeholder rather than a real
    /// analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TeamAnalysis {
    /// Placeholder result returned when the backend cannot be reached.
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            grade: "F".to_string(),
            strengths: Vec::new(),
            weaknesses: vec![AnalysisPoint {
                point: "Failed to analyze team due to technical error".to_string(),
                reasoning: "Please try again later".to_string(),
            }],
            threats: vec![AnalysisPoint {
                point: "Unknown".to_string(),
                reasoning: "Analysis failed".to_string(),
            }],
            suggestions: vec![Suggestion {
                kind: "general".to_string(),
                description: "Please try again later or check your team format".to_string(),
                priority: "high".to_string(),
            }],
            error: Some(reason.into()),
        }
    }
}

impl AnalyzerClient {
    /// Ask the backend to grade a team export.
    ///
    /// A transport failure or non-2xx response degrades to a grade-F
    /// placeholder describing the problem; this call never fails.
    pub async fn analyze(&self, team_text: &str) -> TeamAnalysis {
        match self.request_analysis(team_text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!(error = %e, "Analysis backend unavailable, returning degraded result");
                TeamAnalysis::degraded(e.to_string())
            }
        }
    }

    async fn request_analysis(&self, team_text: &str) -> Result<TeamAnalysis, ClientError> {
        let response = self
            .http
            .post(format!("{}/analyze-team", self.base_url))
            .json(&json!({ "team": team_text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
