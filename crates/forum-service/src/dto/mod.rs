//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddCommentRequest, AddReplyRequest, AddThreadRequest, LoginRequest, LogoutRequest,
    RefreshTokenRequest, RegisterUserRequest, ValidatePayload,
};

pub use responses::{
    AccessTokenResponse, AddedCommentData, AddedCommentResponse, AddedReplyData,
    AddedReplyResponse, AddedThreadData, AddedThreadResponse, AddedUserData, AddedUserResponse,
    CommentDetailResponse, HealthChecks, HealthResponse, ReadinessResponse, ReplyDetailResponse,
    ThreadData, ThreadDetailResponse, TokenPairResponse,
};
