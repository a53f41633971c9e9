use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginDto, RegisterDto, TokenResponse};
use crate::modules::comments::model::{Comment, CreateCommentDto, UpdateCommentDto};
use crate::modules::photos::model::{
    CreatePhotoDto, Photo, PhotoOwner, PhotoWithOwner, UpdatePhotoDto,
};
use crate::modules::social_media::model::{
    CreateSocialMediaDto, SocialMedia, UpdateSocialMediaDto,
};
use crate::modules::users::model::{UpdateUserDto, User};
use crate::utils::response::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::photos::controller::create_photo,
        crate::modules::photos::controller::get_photos,
        crate::modules::photos::controller::get_photo,
        crate::modules::photos::controller::update_photo,
        crate::modules::photos::controller::delete_photo,
        crate::modules::comments::controller::create_comment,
        crate::modules::comments::controller::get_comment,
        crate::modules::comments::controller::update_comment,
        crate::modules::comments::controller::delete_comment,
        crate::modules::social_media::controller::create_social_media,
        crate::modules::social_media::controller::get_social_media,
        crate::modules::social_media::controller::update_social_media,
        crate::modules::social_media::controller::delete_social_media,
    ),
    components(
        schemas(
            User,
            RegisterDto,
            LoginDto,
            TokenResponse,
            UpdateUserDto,
            Photo,
            PhotoOwner,
            PhotoWithOwner,
            CreatePhotoDto,
            UpdatePhotoDto,
            Comment,
            CreateCommentDto,
            UpdateCommentDto,
            SocialMedia,
            CreateSocialMediaDto,
            UpdateSocialMediaDto,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "Profile management endpoints"),
        (name = "Photos", description = "Photo management endpoints"),
        (name = "Comments", description = "Photo comment endpoints"),
        (name = "SocialMedia", description = "Profile social media links")
    ),
    info(
        title = "Photogram API",
        version = "0.1.0",
        description = "A photo-sharing REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
