//! # Business Insights
//!
//! Read-only list of suggestions behind the insights page, filterable by
//! whether each one is good news, bad news or neither.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How an insight affects the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl std::str::FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Impact::Positive),
            "negative" => Ok(Impact::Negative),
            "neutral" => Ok(Impact::Neutral),
            other => Err(format!("unknown impact: {}", other)),
        }
    }
}

/// One suggestion card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub category: String,
    /// Suggested next step, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InsightDirectory {
    insights: Vec<Insight>,
}

impl InsightDirectory {
    pub fn new(insights: Vec<Insight>) -> Self {
        InsightDirectory { insights }
    }

    /// Sample insights shown on the dashboard.
    pub fn sample() -> Self {
        InsightDirectory::new(vec![
            Insight {
                id: 1,
                title: "Revenue Growth Opportunity".to_string(),
                description: "Based on current trends, increasing your weekday lunch menu \
                              prices by 5% could generate an additional $1,200 monthly \
                              revenue with minimal impact on sales volume."
                    .to_string(),
                impact: Impact::Positive,
                category: "Pricing".to_string(),
                action: Some("Review and adjust lunch menu prices".to_string()),
            },
            Insight {
                id: 2,
                title: "Inventory Alert".to_string(),
                description: "Coffee bean usage is 30% higher than usual. This may indicate \
                              waste in preparation or potential inventory shrinkage."
                    .to_string(),
                impact: Impact::Negative,
                category: "Inventory".to_string(),
                action: Some("Audit coffee preparation process".to_string()),
            },
            Insight {
                id: 3,
                title: "Customer Behavior Pattern".to_string(),
                description: "Customers who order dessert are 45% more likely to return \
                              within 2 weeks. Consider training staff to suggest dessert \
                              pairings."
                    .to_string(),
                impact: Impact::Positive,
                category: "Customer Experience".to_string(),
                action: Some("Implement dessert recommendation training".to_string()),
            },
            Insight {
                id: 4,
                title: "Staffing Optimization".to_string(),
                description: "Current staffing levels on Tuesday mornings exceed customer \
                              demand by 20%. Adjusting schedules could save $400 monthly."
                    .to_string(),
                impact: Impact::Neutral,
                category: "Operations".to_string(),
                action: Some("Review Tuesday morning staffing".to_string()),
            },
        ])
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    /// Insights with the given impact, or all of them for `None`.
    pub fn filter(&self, impact: Option<Impact>) -> Vec<&Insight> {
        self.insights
            .iter()
            .filter(|i| match impact {
                Some(wanted) => i.impact == wanted,
                None => true,
            })
            .collect()
    }
}
