//! # Repository Module
//!
//! State access implementations for Tandoor POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern puts every read and write of the shared state   │
//! │  behind a clean API that also enforces the domain rules.                │
//! │                                                                         │
//! │  Command / UI handler                                                   │
//! │       │                                                                 │
//! │       │  store.orders().complete("ord-42")                              │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  OrderRepository                                                        │
//! │  ├── create(&self, draft)                                               │
//! │  ├── modify(&self, id, draft)                                           │
//! │  ├── complete(&self, id)   ← status change + sale append, one lock      │
//! │  └── cancel(&self, id)                                                  │
//! │       │                                                                 │
//! │       │  Mutex<Collections>                                             │
//! │       ▼                                                                 │
//! │  Shared in-memory state                                                 │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Validation and transition rules cannot be bypassed                   │
//! │  • Easy to test (fresh store per test)                                  │
//! │  • Locking is isolated in one place per repository                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`catalog::CatalogRepository`] - Menu item CRUD and queries
//! - [`order::OrderRepository`] - Order lifecycle operations
//! - [`sale::SalesLedger`] - Append-only sales record

pub mod catalog;
pub mod order;
pub mod sale;
