//! # Commands
//!
//! Functions the storefront pages call. Each takes exactly the state it
//! needs (`&CartStore`, `&StoreConfig`, a collaborator) and returns
//! `Result<T, ApiError>` when it can fail.
//!
//! | Page      | Commands                                                   |
//! |-----------|------------------------------------------------------------|
//! | Home      | `list_products`, `increment_cart_item`, `decrement_cart_item`, `remove_from_cart` |
//! | Shipping  | `submit_shipping`, `remove_from_cart`                      |
//! | Checkout  | `start_checkout`, `complete_checkout`                      |

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod shipping;
