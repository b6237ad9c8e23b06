//! OpenAPI documentation for the user gateway responses.
//!
//! Enumerations are documented as plain integers; their values are listed on
//! the Rust types in [`crate::types`].

use crate::types::{
    Address, Cart, CartItem, CartSummary, Category, Coordinator, Experience, ExperienceMedia,
    ExperiencePrice, ExperienceRate, ExperienceReview, ExperienceType, Live, Order,
    OrderExperience, OrderFulfillment, OrderItem, OrderPayment, OrderRefund, Producer, Product,
    ProductMedia, ProductRate, ProductReview, ProductTag, ProductType, Promotion, Schedule, Spot,
    SpotType, User, UserReviewReaction, Video, VideoComment,
};
use furumaru_core::ErrorResponse;
use utoipa::OpenApi;

/// OpenAPI documentation for the Furumaru user gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Furumaru User Gateway API",
        version = "1.0.0",
        description = "Response shapes served to the Furumaru user application",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/v1", description = "API v1")
    ),
    components(
        schemas(
            ErrorResponse,
            // Accounts
            Address,
            User,
            Coordinator,
            Producer,
            // Catalog
            Category,
            ProductType,
            ProductTag,
            ProductMedia,
            ProductRate,
            Product,
            ExperienceType,
            ExperienceMedia,
            ExperienceRate,
            Experience,
            ExperiencePrice,
            // Reviews
            ProductReview,
            ExperienceReview,
            UserReviewReaction,
            // Checkout
            Promotion,
            CartItem,
            Cart,
            CartSummary,
            OrderPayment,
            OrderRefund,
            OrderFulfillment,
            OrderItem,
            OrderExperience,
            Order,
            // Content
            SpotType,
            Spot,
            Schedule,
            Live,
            Video,
            VideoComment,
        )
    ),
    tags(
        (name = "catalog", description = "Products, experiences and their classification"),
        (name = "checkout", description = "Carts, promotions and orders"),
        (name = "content", description = "Lives, videos and spots")
    )
)]
pub struct GatewayApiDoc;
