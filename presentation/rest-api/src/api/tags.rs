use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Liveness and service information
    Health,
    /// Profile, onboarding and skin goals of the signed-in user
    Users,
    /// Face image upload and Haut.ai skin analysis results
    Analysis,
}
