//! Order placement.
//!
//! The one use case that ties the customer directory, the product catalog,
//! and order persistence together: validate, price, persist, decrement.

use std::collections::HashSet;

use thiserror::Error;

use storefront_core::{CustomerId, ProductId, RepositoryError};
use storefront_customers::CustomerRepository;
use storefront_products::{ProductRepository, QuantityUpdate};

use crate::order::{Order, PricedLine, RequestedProduct};
use crate::repository::OrdersRepository;

/// Input to [`CreateOrderService::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub products: Vec<RequestedProduct>,
}

/// Order placement failure.
///
/// Every variant except `Repository` is a user-facing validation failure.
/// Any of them aborts the remaining steps, so no order is persisted and no
/// stock level is touched once one fires.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateOrderError {
    #[error("could not find any customer with the given id")]
    CustomerNotFound,

    /// None of the requested product ids matched the catalog.
    #[error("could not find any products with the given ids")]
    NoProductsFound,

    /// Some requested ids matched; the listed ones did not. Ids are kept in
    /// the order they appeared in the request.
    #[error("could not find products: {}", join_ids(.0))]
    ProductsNotFound(Vec<ProductId>),

    /// At least one requested quantity exceeds the on-hand quantity.
    #[error("one or more products have insufficient quantity available")]
    InsufficientStock,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

fn join_ids(ids: &[ProductId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Places an order: resolves the customer and the requested products, checks
/// stock, persists the order with unit prices captured at validation time,
/// and writes back the decremented stock levels.
///
/// The stock check and the stock write-back are separate repository calls
/// with nothing holding the read levels stable in between: two concurrent
/// placements over the same product can both pass the check and overdraw the
/// stock. Placement is likewise not idempotent; submitting the same request
/// twice creates two orders and decrements twice. A persistence failure
/// after the order is created leaves the order without its decrement, as
/// there is no compensation step.
#[derive(Debug)]
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrdersRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    #[tracing::instrument(skip_all, fields(customer_id = %request.customer_id))]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, CreateOrderError> {
        let CreateOrderRequest {
            customer_id,
            products: requested,
        } = request;

        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or(CreateOrderError::CustomerNotFound)?;

        let requested_ids: Vec<ProductId> = requested.iter().map(|p| p.product_id).collect();
        let existing = self.products.find_all_by_ids(&requested_ids).await?;

        if existing.is_empty() {
            return Err(CreateOrderError::NoProductsFound);
        }

        let existing_ids: HashSet<ProductId> = existing.iter().map(|p| p.id).collect();
        let missing: Vec<ProductId> = requested_ids
            .iter()
            .copied()
            .filter(|id| !existing_ids.contains(id))
            .collect();

        if !missing.is_empty() {
            return Err(CreateOrderError::ProductsNotFound(missing));
        }

        // Every requested id resolved past this point.
        let out_of_stock = requested.iter().any(|req| {
            existing
                .iter()
                .find(|p| p.id == req.product_id)
                .is_some_and(|p| p.quantity < req.quantity)
        });

        if out_of_stock {
            return Err(CreateOrderError::InsufficientStock);
        }

        // Unit prices are copied out of the catalog here; the order keeps
        // them even if the catalog changes afterwards. The zero fallback
        // covers an id the coverage check already guarantees resolvable.
        let lines: Vec<PricedLine> = requested
            .iter()
            .map(|req| PricedLine {
                product_id: req.product_id,
                quantity: req.quantity,
                unit_price: existing
                    .iter()
                    .find(|p| p.id == req.product_id)
                    .map(|p| p.unit_price)
                    .unwrap_or(0),
            })
            .collect();

        let order = self.orders.create(&customer, lines).await?;

        // New levels derive from the lines the store persisted, not from the
        // request; persistence may reshape them. A persisted line whose
        // product the catalog never resolved falls back to an on-hand level
        // of zero.
        let updates: Vec<QuantityUpdate> = order
            .lines
            .iter()
            .map(|line| QuantityUpdate {
                product_id: line.product_id,
                quantity: existing
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(|p| p.quantity)
                    .unwrap_or(0)
                    - line.quantity,
            })
            .collect();

        self.products.update_quantities(updates).await?;

        tracing::info!(order_id = %order.id, lines = order.lines.len(), "order placed");

        Ok(order)
    }
}
