//! Order CRUD handlers.
//!
//! Each handler performs exactly one call on the order repository. There is
//! no existence check before updates or deletes: both are unconditional at
//! the store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use orders_core::order::{
    order_pk_from_path, today, validate_create_request, CreateOrderRequest, Order, OrderKey,
    UpdateOrderRequest, UpdatedOrderFields,
};

use crate::{handlers::AppError, state::AppState};

/// Create a new order (POST /orders).
///
/// Responds 200 with the full stored record.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<Order>, AppError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create order request");

    validate_create_request(&payload)?;
    let order = payload.into_order();

    state.order_repo.put_order(&order).await?;

    tracing::info!(pk = %order.partition_key, sk = %order.sort_key, "Created order");

    Ok(Json(order))
}

/// Get every record stored under an order ID (GET /orders/{order_id}).
///
/// Responds 200 with a JSON array, empty when nothing matches.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Vec<Order>>, AppError> {
    let partition_key = order_pk_from_path(&order_id);

    let orders = state.order_repo.query_orders(&partition_key).await?;

    tracing::debug!(pk = %partition_key, count = orders.len(), "Queried order");

    Ok(Json(orders))
}

/// Update an order's product and status (PUT /orders/{order_id}/{user_id}).
///
/// Responds 200 with the fields written by the store.
pub async fn update_order(
    State(state): State<AppState>,
    Path((order_id, user_id)): Path<(String, String)>,
    payload: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<Json<UpdatedOrderFields>, AppError> {
    let Json(payload) = payload?;
    let key = OrderKey::from_path(&order_id, &user_id);
    let changes = payload.into_changes(today());

    let updated = state.order_repo.update_order(&key, &changes).await?;

    tracing::info!(
        pk = %key.partition_key,
        sk = %key.sort_key,
        order_status = ?updated.order_status,
        "Updated order"
    );

    Ok(Json(updated))
}

/// Delete an order (DELETE /orders/{order_id}/{user_id}).
///
/// Responds 204 whether or not the record existed.
pub async fn delete_order(
    State(state): State<AppState>,
    Path((order_id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let key = OrderKey::from_path(&order_id, &user_id);

    state.order_repo.delete_order(&key).await?;

    tracing::info!(pk = %key.partition_key, sk = %key.sort_key, "Deleted order");

    Ok(StatusCode::NO_CONTENT)
}
