//! REST API endpoint tests.

mod customer_tests;
