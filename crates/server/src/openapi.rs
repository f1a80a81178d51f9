use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct AddressDoc { pub city: Option<String>, pub state: Option<String> }

#[derive(ToSchema)]
pub struct PersonDoc {
    pub id: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub address: Option<AddressDoc>,
}

#[derive(ToSchema)]
pub struct ColorSettingDoc { pub major: i64, pub hue: i64 }

#[derive(ToSchema)]
pub struct HueDoc { pub hue: i64 }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::people::list_people,
        crate::routes::people::get_person,
        crate::routes::people::create_person,
        crate::routes::people::delete_person,
        crate::routes::colors::upsert_color,
        crate::routes::colors::get_color,
        crate::routes::colors::get_colors,
    ),
    components(
        schemas(
            HealthResponse,
            AddressDoc,
            PersonDoc,
            ColorSettingDoc,
            HueDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "people"),
        (name = "colors")
    )
)]
pub struct ApiDoc;
