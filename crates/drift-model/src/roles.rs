//! Column role sets derived from the input schema.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::schema::DataClass;

/// Numerical and categorical column names, disjoint and in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnRoles {
    numerical_columns: Vec<String>,
    categorical_columns: Vec<String>,
}

impl ColumnRoles {
    /// Builds the role sets, rejecting duplicates and overlaps.
    pub fn new(numerical_columns: Vec<String>, categorical_columns: Vec<String>) -> Result<Self> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for column in &numerical_columns {
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        let mut seen_categorical: BTreeSet<&str> = BTreeSet::new();
        for column in &categorical_columns {
            if seen.contains(column.as_str()) {
                return Err(ModelError::OverlappingRoles {
                    column: column.clone(),
                });
            }
            if !seen_categorical.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        Ok(Self {
            numerical_columns,
            categorical_columns,
        })
    }

    pub fn numerical_columns(&self) -> &[String] {
        &self.numerical_columns
    }

    pub fn categorical_columns(&self) -> &[String] {
        &self.categorical_columns
    }

    /// Class of a column, or `None` if it has no role.
    pub fn class_of(&self, column: &str) -> Option<DataClass> {
        if self.numerical_columns.iter().any(|name| name == column) {
            Some(DataClass::Numerical)
        } else if self.categorical_columns.iter().any(|name| name == column) {
            Some(DataClass::Categorical)
        } else {
            None
        }
    }

    /// All columns with their class, numerical first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, DataClass)> {
        self.numerical_columns
            .iter()
            .map(|name| (name.as_str(), DataClass::Numerical))
            .chain(
                self.categorical_columns
                    .iter()
                    .map(|name| (name.as_str(), DataClass::Categorical)),
            )
    }
}
