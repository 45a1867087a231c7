//! DynamoDB repository implementation.
//!
//! Implements `OrderRepository` from `orders_core::storage` using DynamoDB.
//! Every method issues exactly one request (a query issues one per page).

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use orders_core::order::{Order, OrderChanges, OrderKey, UpdatedOrderFields};
use orders_core::storage::{OrderRepository, Result};

use super::conversions::{
    attributes_to_updated_fields, changes_to_values, item_to_order, order_to_item,
    UPDATE_EXPRESSION,
};
use super::error::{
    map_delete_item_error, map_describe_table_error, map_put_item_error, map_query_error,
    map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region,
    /// and the custom endpoint when one is set (e.g. DynamoDB Local).
    pub async fn from_config(config: &Config) -> Self {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key_attributes(key: &OrderKey) -> [(String, AttributeValue); 2] {
        [
            ("PK".to_string(), AttributeValue::S(key.partition_key.clone())),
            ("SK".to_string(), AttributeValue::S(key.sort_key.clone())),
        ]
    }
}

#[async_trait]
impl OrderRepository for DynamoDbRepository {
    async fn put_order(&self, order: &Order) -> Result<()> {
        let item = order_to_item(order);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn query_orders(&self, partition_key: &str) -> Result<Vec<Order>> {
        let mut orders = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("PK = :pk")
                .expression_attribute_values(":pk", AttributeValue::S(partition_key.to_string()))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items.unwrap_or_default() {
                orders.push(item_to_order(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        Ok(orders)
    }

    async fn update_order(
        &self,
        key: &OrderKey,
        changes: &OrderChanges,
    ) -> Result<UpdatedOrderFields> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key_attributes(key).into_iter().collect()))
            .update_expression(UPDATE_EXPRESSION)
            .set_expression_attribute_values(Some(changes_to_values(changes)))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        attributes_to_updated_fields(&result.attributes.unwrap_or_default())
    }

    async fn delete_order(&self, key: &OrderKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key_attributes(key).into_iter().collect()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_describe_table_error)?;

        Ok(())
    }
}
