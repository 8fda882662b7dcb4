//! Core record types consumed by the helpers.
//!
//! Every record is a plain value: callers build them, pass them in by reference, and get new
//! values back. Closed sets (roles, transaction kinds, languages) are enums so that an unknown
//! variant cannot reach a helper.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HelperError, HelperResult};

/// A task (or todo) item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within a collection.
    pub id: u64,
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Create an open task.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

/// Todo items share the task shape.
pub type Todo = Task;

/// A line in a shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    /// Unit price, non-negative.
    pub price: f64,
    pub qty: u32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: f64, qty: u32) -> Self {
        Self {
            name: name.into(),
            price,
            qty,
        }
    }

    /// `price * qty` for this line.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// An inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    /// Threshold at or below which the item should be reordered.
    pub reorder_at: i64,
}

impl StockItem {
    pub fn new(sku: impl Into<String>, name: impl Into<String>, quantity: i64, reorder_at: i64) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            quantity,
            reorder_at,
        }
    }

    /// `true` when `quantity <= reorder_at`.
    pub fn is_low(&self) -> bool {
        self.quantity <= self.reorder_at
    }
}

/// Direction of money flow for a [`Transaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Non-negative amount; the sign comes from `kind`.
    pub amount: f64,
}

impl Transaction {
    pub fn new(id: impl Into<String>, kind: TransactionKind, amount: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
        }
    }
}

/// Totals produced by [`crate::processing::summarize`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub income: f64,
    pub expense: f64,
    /// `income - expense`.
    pub net: f64,
}

/// A validated user summary taken from untyped external data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub points: f64,
}

/// Access role. The set is closed; see [`Role::rank`] for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Sort rank: admin=1, editor=2, viewer=3.
    pub fn rank(self) -> u8 {
        match self {
            Role::Admin => 1,
            Role::Editor => 2,
            Role::Viewer => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            other => {
                tracing::warn!(role = other, "rejecting role outside the closed set");
                Err(HelperError::UnknownRole {
                    role: other.to_string(),
                })
            }
        }
    }
}

/// A named user with a [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    /// Build a user from a raw role string.
    ///
    /// Fails with [`HelperError::UnknownRole`] if `role` is not `admin`, `editor` or `viewer`.
    pub fn new(name: impl Into<String>, role: &str) -> HelperResult<Self> {
        Ok(Self {
            name: name.into(),
            role: role.parse()?,
        })
    }

    pub fn with_role(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// A leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// UI language setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

/// User-facing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub language: Language,
    pub dark_mode: bool,
    pub items_per_page: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            dark_mode: false,
            items_per_page: 20,
        }
    }
}

/// Partial update for [`Settings`]; `None` fields leave the base value alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub language: Option<Language>,
    pub dark_mode: Option<bool>,
    pub items_per_page: Option<u32>,
}
