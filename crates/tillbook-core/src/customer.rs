//! # Customer Directory
//!
//! Static customer list behind the customers dashboard, with the same search
//! box and status filter the dashboard offers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Customer, CustomerStatus};
use crate::validation::{validate_search_query, ValidationResult};

/// Status dropdown on the customers page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn accepts(self, status: CustomerStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == CustomerStatus::Active,
            StatusFilter::Inactive => status == CustomerStatus::Inactive,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            other => Err(format!("unknown status filter: {}", other)),
        }
    }
}

/// Read-only list of customers.
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new(customers: Vec<Customer>) -> Self {
        CustomerDirectory { customers }
    }

    /// Sample customers shown on the dashboard.
    pub fn sample() -> Self {
        CustomerDirectory::new(vec![
            sample_customer(
                1,
                "Alice Johnson",
                "alice@example.com",
                "(555) 123-4567",
                42,
                125_080,
                (2024, 3, 15),
                450,
                CustomerStatus::Active,
            ),
            sample_customer(
                2,
                "Bob Smith",
                "bob@example.com",
                "(555) 234-5678",
                28,
                89_050,
                (2024, 3, 12),
                280,
                CustomerStatus::Active,
            ),
            sample_customer(
                3,
                "Carol Williams",
                "carol@example.com",
                "(555) 345-6789",
                15,
                45_025,
                (2024, 2, 28),
                150,
                CustomerStatus::Inactive,
            ),
            sample_customer(
                4,
                "David Brown",
                "david@example.com",
                "(555) 456-7890",
                35,
                98_060,
                (2024, 3, 14),
                350,
                CustomerStatus::Active,
            ),
        ])
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Customers whose name or email contains `term` (ignoring case) and
    /// whose status passes `status`.
    pub fn filter(&self, term: &str, status: StatusFilter) -> ValidationResult<Vec<&Customer>> {
        let needle = validate_search_query(term)?.to_lowercase();

        Ok(self
            .customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle) || c.email.to_lowercase().contains(&needle)
            })
            .filter(|c| status.accepts(c.status))
            .collect())
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_customer(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    total_orders: u32,
    total_spent_cents: i64,
    (year, month, day): (i32, u32, u32),
    loyalty_points: u32,
    status: CustomerStatus,
) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        total_orders,
        total_spent_cents,
        last_visit: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        loyalty_points,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn ids(customers: &[&Customer]) -> Vec<u32> {
        customers.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_filter_all() {
        let dir = CustomerDirectory::sample();
        assert_eq!(ids(&dir.filter("", StatusFilter::All).unwrap()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_by_status() {
        let dir = CustomerDirectory::sample();
        assert_eq!(ids(&dir.filter("", StatusFilter::Inactive).unwrap()), vec![3]);
        assert_eq!(ids(&dir.filter("", StatusFilter::Active).unwrap()), vec![1, 2, 4]);
    }

    #[test]
    fn test_filter_matches_name_or_email() {
        let dir = CustomerDirectory::sample();
        assert_eq!(ids(&dir.filter("SMITH", StatusFilter::All).unwrap()), vec![2]);
        assert_eq!(ids(&dir.filter("david@", StatusFilter::All).unwrap()), vec![4]);
        assert!(dir.filter("carol", StatusFilter::Active).unwrap().is_empty());
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!("Active".parse::<StatusFilter>().unwrap(), StatusFilter::Active);
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!("vip".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_sample_spend() {
        let dir = CustomerDirectory::sample();
        assert_eq!(dir.customers()[0].total_spent(), Money::from_cents(125_080));
        assert_eq!(
            dir.customers()[2].last_visit,
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()
        );
    }
}
