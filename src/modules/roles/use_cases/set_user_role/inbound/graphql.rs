use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::roles::use_cases::set_user_role::command::{CallerClaims, SetUserRole};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct SetUserRolePayload {
    pub ok: bool,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn set_user_role(
        &self,
        context: &Context<'_>,
        uid: String,
        business_id: String,
        role: String,
    ) -> GqlResult<SetUserRolePayload> {
        let state = context.data_unchecked::<AppState>();
        let caller = context
            .data_opt::<CallerClaims>()
            .cloned()
            .unwrap_or_default();

        state
            .set_user_role_handler
            .handle(
                &caller,
                SetUserRole {
                    uid,
                    business_id,
                    role,
                },
            )
            .await
            .map_err(|e| {
                let code = e.code();
                async_graphql::Error::new(e.to_string()).extend_with(|_, ext| ext.set("code", code))
            })?;

        Ok(SetUserRolePayload { ok: true })
    }
}
