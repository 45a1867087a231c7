mod error;
mod keys;
mod operations;
mod requests;
mod types;

pub use error::OrderError;
pub use keys::{
    order_pk, order_pk_from_path, user_sk, user_sk_from_path, ORDER_PREFIX, USER_PREFIX,
};
pub use operations::{today, validate_create_request, MAX_PRICE, MIN_POSITIVE_PRICE};
pub use requests::{CreateOrderRequest, UpdateOrderRequest};
pub use types::{Order, OrderChanges, OrderKey, UpdatedOrderFields, DEFAULT_ORDER_STATUS};
