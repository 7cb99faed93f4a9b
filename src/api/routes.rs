//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, OperationContext, VoucherStatus};
use crate::error::{AppError, AppResult};
use crate::footstep::{ChainVerificationResult, Footstep, FootstepBuilder};
use crate::managers::{
    Account, AdjustmentEntry, AdjustmentEntryTotals, Bank, BillAndCoins, CashCheckVoucher,
    Currency, JournalVoucher, MemberAsset, Notification, NotificationRequest, Timesheet,
    TimesheetRequest, TransactionBatch, TransactionBatchRequest,
};
use crate::registry::{Entity, RegistryError};
use crate::seed::{self, SeedSummary};

use super::resource::{BranchResource, EditableResource, VoucherResource};
use super::AppState;

type Responses<E> = Json<Vec<<E as Entity>::Response>>;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct VoucherQuery {
    #[serde(default)]
    pub status: Option<VoucherStatus>,
}

#[derive(Debug, Deserialize)]
pub struct TotalsQuery {
    #[serde(default)]
    pub transaction_batch_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

// =========================================================================
// API Router
// =========================================================================

fn crud<R: EditableResource>(router: Router<AppState>, path: &str) -> Router<AppState> {
    router
        .route(path, get(list_records::<R>).post(create_record::<R>))
        .route(
            &format!("{}/:id", path),
            get(get_record::<R>)
                .put(update_record::<R>)
                .delete(delete_record::<R>),
        )
}

fn vouchers<R: VoucherResource>(router: Router<AppState>, path: &str) -> Router<AppState> {
    router
        .route(path, get(list_vouchers::<R>).post(create_record::<R>))
        .route(
            &format!("{}/:id", path),
            get(get_record::<R>).delete(delete_record::<R>),
        )
        .route(&format!("{}/:id/print", path), post(print_voucher::<R>))
        .route(&format!("{}/:id/approve", path), post(approve_voucher::<R>))
        .route(&format!("{}/:id/release", path), post(release_voucher::<R>))
        .route(
            &format!("{}/released-today", path),
            get(released_today_vouchers::<R>),
        )
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    let router = Router::new();
    let router = crud::<Bank>(router, "/banks");
    let router = crud::<BillAndCoins>(router, "/bill-and-coins");
    let router = crud::<MemberAsset>(router, "/member-assets");
    let router = crud::<Account>(router, "/accounts");
    let router = crud::<AdjustmentEntry>(router, "/adjustment-entries");
    let router = vouchers::<JournalVoucher>(router, "/journal-vouchers");
    let router = vouchers::<CashCheckVoucher>(router, "/cash-check-vouchers");

    router
        .route("/bill-and-coins/currency/:currency_id", get(bill_and_coins_by_currency))
        .route("/member-assets/member-profile/:member_profile_id", get(member_assets_by_profile))
        .route("/accounts/code/:code", get(account_by_code))
        .route("/adjustment-entries/totals", get(adjustment_entry_totals))
        .route("/journal-vouchers/:id/post", post(post_journal_voucher))
        .route("/cash-check-vouchers/:id", put(update_record::<CashCheckVoucher>))
        // Currencies
        .route("/currencies", get(list_currencies))
        .route("/currencies/default", get(default_currency))
        .route("/currencies/:id", get(get_currency))
        .route("/currencies/code/:code", get(currency_by_code))
        .route("/currencies/alpha2/:code", get(currency_by_alpha2))
        .route("/currencies/alpha3/:code", get(currency_by_alpha3))
        // Timesheets
        .route("/timesheets", get(my_timesheets))
        .route("/timesheets/branch", get(branch_timesheets))
        .route("/timesheets/current", get(current_timesheet))
        .route("/timesheets/toggle", post(toggle_timesheet))
        // Notifications
        .route("/notifications", get(my_notifications).post(send_notification))
        .route("/notifications/unviewed", get(unviewed_notifications))
        .route("/notifications/count", get(unviewed_notification_count))
        .route("/notifications/read-all", post(read_all_notifications))
        .route("/notifications/:id", delete(delete_notification))
        // Transaction batches
        .route("/transaction-batches", post(open_transaction_batch))
        .route("/transaction-batches/current", get(current_transaction_batch))
        .route("/transaction-batches/view-requests", get(transaction_batch_view_requests))
        .route("/transaction-batches/closed-today", get(transaction_batches_closed_today))
        .route("/transaction-batches/:id/close", post(close_transaction_batch))
        .route("/transaction-batches/:id/request-view", post(request_transaction_batch_view))
        .route("/transaction-batches/:id/accept-view", post(accept_transaction_batch_view))
        // Footsteps
        .route("/footsteps", get(branch_footsteps))
        .route("/footsteps/verify", get(verify_footsteps))
        // Seeding
        .route("/seed/organization", post(seed_organization))
}

/// Record a footstep; failures are logged and never fail the request
async fn track(state: &AppState, context: &OperationContext, builder: FootstepBuilder) {
    if let Err(e) = state.footsteps.record(builder, context).await {
        tracing::warn!(error = %e, "Failed to record footstep");
    }
}

// =========================================================================
// Generic branch CRUD
// =========================================================================

async fn list_records<R: BranchResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<R>> {
    let scope = context.require_branch()?;
    let registry = R::registry(&state.managers);
    let records = registry
        .current_branch(scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(registry.to_responses(&records)))
}

async fn get_record<R: BranchResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<R::Response>> {
    let scope = context.require_branch()?;
    let registry = R::registry(&state.managers);
    let record = registry
        .get_in_branch(id, scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(registry.to_response(&record)))
}

async fn create_record<R: BranchResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(request): Json<R::Request>,
) -> AppResult<(StatusCode, Json<R::Response>)> {
    let scope = context.require_branch()?;
    let registry = R::registry(&state.managers);
    let record = registry
        .create(R::build(request, scope, context.user_id))
        .await?;
    let response = registry.to_response(&record);

    track(
        &state,
        &context,
        FootstepBuilder::new(R::TOPIC, "create")
            .resource_id(record.id())
            .after_state(&response),
    )
    .await;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_record<R: EditableResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<R::Request>,
) -> AppResult<Json<R::Response>> {
    let scope = context.require_branch()?;
    let registry = R::registry(&state.managers);
    let mut record = registry
        .get_in_branch(id, scope.organization_id, scope.branch_id)
        .await?;
    record.ensure_editable()?;
    let before = registry.to_response(&record);

    R::apply(request, &mut record, context.user_id);
    let record = registry.update(record).await?;
    let response = registry.to_response(&record);

    track(
        &state,
        &context,
        FootstepBuilder::new(R::TOPIC, "update")
            .resource_id(id)
            .before_state(&before)
            .after_state(&response),
    )
    .await;

    Ok(Json(response))
}

async fn delete_record<R: BranchResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let scope = context.require_branch()?;
    let registry = R::registry(&state.managers);
    let record = registry
        .get_in_branch(id, scope.organization_id, scope.branch_id)
        .await?;
    let before = registry.to_response(&record);
    registry.delete(id, context.user_id).await?;

    track(
        &state,
        &context,
        FootstepBuilder::new(R::TOPIC, "delete")
            .resource_id(id)
            .before_state(&before),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Branch resource queries
// =========================================================================

async fn bill_and_coins_by_currency(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(currency_id): Path<Uuid>,
) -> AppResult<Responses<BillAndCoins>> {
    let scope = context.require_branch()?;
    let registry = &state.managers.bill_and_coins;
    let records = registry
        .by_currency(scope.organization_id, scope.branch_id, currency_id)
        .await?;
    Ok(Json(registry.to_responses(&records)))
}

async fn member_assets_by_profile(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(member_profile_id): Path<Uuid>,
) -> AppResult<Responses<MemberAsset>> {
    let scope = context.require_branch()?;
    let registry = &state.managers.member_assets;
    let records = registry
        .by_member_profile(scope.organization_id, scope.branch_id, member_profile_id)
        .await?;
    Ok(Json(registry.to_responses(&records)))
}

async fn account_by_code(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(code): Path<String>,
) -> AppResult<Json<<Account as Entity>::Response>> {
    let scope = context.require_branch()?;
    let registry = &state.managers.accounts;
    let account = registry
        .find_by_code(scope.organization_id, scope.branch_id, &code)
        .await?
        .ok_or(RegistryError::NotFoundWhere { entity: Account::TOPIC })?;
    Ok(Json(registry.to_response(&account)))
}

async fn adjustment_entry_totals(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(query): Query<TotalsQuery>,
) -> AppResult<Json<AdjustmentEntryTotals>> {
    let scope = context.require_branch()?;
    let totals = state
        .managers
        .adjustment_entries
        .totals(scope.organization_id, scope.branch_id, query.transaction_batch_id)
        .await?;
    Ok(Json(totals))
}

// =========================================================================
// Vouchers
// =========================================================================

async fn list_vouchers<R: VoucherResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(query): Query<VoucherQuery>,
) -> AppResult<Responses<R>> {
    let scope = context.require_branch()?;
    let registry = R::registry(&state.managers);
    let records = match query.status {
        Some(status) => {
            registry
                .by_status(scope.organization_id, scope.branch_id, status)
                .await?
        }
        None => {
            registry
                .current_branch(scope.organization_id, scope.branch_id)
                .await?
        }
    };
    Ok(Json(registry.to_responses(&records)))
}

async fn released_today_vouchers<R: VoucherResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<R>> {
    let scope = context.require_branch()?;
    let registry = R::registry(&state.managers);
    let records = registry
        .released_today(scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(registry.to_responses(&records)))
}

async fn move_voucher<R: VoucherResource>(
    state: AppState,
    context: OperationContext,
    id: Uuid,
    to: VoucherStatus,
) -> AppResult<Json<R::Response>> {
    let scope = context.require_branch()?;
    let registry = R::registry(&state.managers);
    let voucher = registry.transition(id, scope, to, context.user_id).await?;
    let response = registry.to_response(&voucher);

    track(
        &state,
        &context,
        FootstepBuilder::new(R::TOPIC, to.as_str())
            .resource_id(id)
            .after_state(&response),
    )
    .await;

    Ok(Json(response))
}

async fn print_voucher<R: VoucherResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<R::Response>> {
    move_voucher::<R>(state, context, id, VoucherStatus::Printed).await
}

async fn approve_voucher<R: VoucherResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<R::Response>> {
    move_voucher::<R>(state, context, id, VoucherStatus::Approved).await
}

async fn release_voucher<R: VoucherResource>(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<R::Response>> {
    move_voucher::<R>(state, context, id, VoucherStatus::Released).await
}

async fn post_journal_voucher(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<<JournalVoucher as Entity>::Response>> {
    let scope = context.require_branch()?;
    let registry = &state.managers.journal_vouchers;
    let voucher = registry.post(id, scope, context.user_id).await?;
    let response = registry.to_response(&voucher);

    track(
        &state,
        &context,
        FootstepBuilder::new(JournalVoucher::TOPIC, "post")
            .resource_id(id)
            .after_state(&response),
    )
    .await;

    Ok(Json(response))
}

// =========================================================================
// Currencies
// =========================================================================

fn currency_or_404(currency: Option<Currency>) -> AppResult<Currency> {
    currency.ok_or_else(|| {
        RegistryError::NotFoundWhere {
            entity: Currency::TOPIC,
        }
        .into()
    })
}

async fn list_currencies(State(state): State<AppState>) -> AppResult<Responses<Currency>> {
    let registry = &state.managers.currencies;
    let currencies = registry.find_all().await?;
    Ok(Json(registry.to_responses(&currencies)))
}

async fn default_currency(
    State(state): State<AppState>,
) -> AppResult<Json<<Currency as Entity>::Response>> {
    let registry = &state.managers.currencies;
    let currency = currency_or_404(registry.default_currency().await?)?;
    Ok(Json(registry.to_response(&currency)))
}

async fn get_currency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<<Currency as Entity>::Response>> {
    let registry = &state.managers.currencies;
    let currency = registry.get_by_id(id).await?;
    Ok(Json(registry.to_response(&currency)))
}

async fn currency_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<<Currency as Entity>::Response>> {
    let registry = &state.managers.currencies;
    let currency = currency_or_404(registry.find_by_code(&code).await?)?;
    Ok(Json(registry.to_response(&currency)))
}

async fn currency_by_alpha2(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<<Currency as Entity>::Response>> {
    let registry = &state.managers.currencies;
    let currency = currency_or_404(registry.find_by_alpha2(&code).await?)?;
    Ok(Json(registry.to_response(&currency)))
}

async fn currency_by_alpha3(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<<Currency as Entity>::Response>> {
    let registry = &state.managers.currencies;
    let currency = currency_or_404(registry.find_by_alpha3(&code).await?)?;
    Ok(Json(registry.to_response(&currency)))
}

// =========================================================================
// Timesheets
// =========================================================================

async fn my_timesheets(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<Timesheet>> {
    let scope = context.require_branch()?;
    let user_id = context.require_user()?;
    let registry = &state.managers.timesheets;
    let sheets = registry
        .by_user(user_id, scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(registry.to_responses(&sheets)))
}

async fn branch_timesheets(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<Timesheet>> {
    let scope = context.require_branch()?;
    let registry = &state.managers.timesheets;
    let sheets = registry
        .current_branch(scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(registry.to_responses(&sheets)))
}

async fn current_timesheet(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Json<Option<<Timesheet as Entity>::Response>>> {
    let scope = context.require_branch()?;
    let user_id = context.require_user()?;
    let registry = &state.managers.timesheets;
    let open = registry
        .current_open(user_id, scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(open.as_ref().map(|sheet| registry.to_response(sheet))))
}

async fn toggle_timesheet(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    request: Option<Json<TimesheetRequest>>,
) -> AppResult<Json<<Timesheet as Entity>::Response>> {
    let scope = context.require_branch()?;
    let user_id = context.require_user()?;
    let request = request.map(|Json(r)| r).unwrap_or_default();

    let registry = &state.managers.timesheets;
    let sheet = registry.toggle(scope, user_id, request).await?;
    let response = registry.to_response(&sheet);

    let activity = if sheet.is_open() { "time-in" } else { "time-out" };
    track(
        &state,
        &context,
        FootstepBuilder::new(Timesheet::TOPIC, activity).resource_id(sheet.id),
    )
    .await;

    Ok(Json(response))
}

// =========================================================================
// Notifications
// =========================================================================

async fn my_notifications(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<Notification>> {
    let user_id = context.require_user()?;
    let registry = &state.managers.notifications;
    let notifications = registry.by_user(user_id).await?;
    Ok(Json(registry.to_responses(&notifications)))
}

async fn unviewed_notifications(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<Notification>> {
    let user_id = context.require_user()?;
    let registry = &state.managers.notifications;
    let notifications = registry.unviewed(user_id).await?;
    Ok(Json(registry.to_responses(&notifications)))
}

async fn unviewed_notification_count(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Json<CountResponse>> {
    let user_id = context.require_user()?;
    let count = state.managers.notifications.unviewed_count(user_id).await?;
    Ok(Json(CountResponse { count }))
}

async fn read_all_notifications(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<Notification>> {
    let user_id = context.require_user()?;
    let registry = &state.managers.notifications;
    let viewed = registry.mark_all_viewed(user_id).await?;
    Ok(Json(registry.to_responses(&viewed)))
}

async fn send_notification(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(request): Json<NotificationRequest>,
) -> AppResult<(StatusCode, Json<<Notification as Entity>::Response>)> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidRequest("title is required".to_string()));
    }
    let registry = &state.managers.notifications;
    let notification = registry.notify(request, context.user_id).await?;
    Ok((StatusCode::CREATED, Json(registry.to_response(&notification))))
}

/// Users may only delete their own notifications; others read as missing
async fn delete_notification(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let user_id = context.require_user()?;
    let registry = &state.managers.notifications;
    let notification = registry.get_by_id(id).await?;
    if notification.user_id != user_id {
        return Err(DomainError::scope_mismatch(Notification::TOPIC, id).into());
    }
    registry.delete(id, Some(user_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// Transaction batches
// =========================================================================

type BatchResponse = Json<<TransactionBatch as Entity>::Response>;

async fn current_transaction_batch(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Json<Option<<TransactionBatch as Entity>::Response>>> {
    let scope = context.require_branch()?;
    let user_id = context.require_user()?;
    let registry = &state.managers.transaction_batches;
    let batch = registry
        .current_open(user_id, scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(batch.as_ref().map(|b| registry.to_response(b))))
}

async fn open_transaction_batch(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(request): Json<TransactionBatchRequest>,
) -> AppResult<(StatusCode, BatchResponse)> {
    let scope = context.require_branch()?;
    let user_id = context.require_user()?;
    let registry = &state.managers.transaction_batches;
    let batch = registry.open(request, scope, user_id).await?;
    let response = registry.to_response(&batch);

    track(
        &state,
        &context,
        FootstepBuilder::new(TransactionBatch::TOPIC, "open")
            .resource_id(batch.id)
            .after_state(&response),
    )
    .await;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn close_transaction_batch(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<BatchResponse> {
    let scope = context.require_branch()?;
    let registry = &state.managers.transaction_batches;
    let batch = registry.close(id, scope, context.user_id).await?;
    let response = registry.to_response(&batch);

    track(
        &state,
        &context,
        FootstepBuilder::new(TransactionBatch::TOPIC, "close")
            .resource_id(id)
            .after_state(&response),
    )
    .await;

    Ok(Json(response))
}

async fn request_transaction_batch_view(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<BatchResponse> {
    let scope = context.require_branch()?;
    let registry = &state.managers.transaction_batches;
    let batch = registry.request_view(id, scope, context.user_id).await?;
    Ok(Json(registry.to_response(&batch)))
}

async fn accept_transaction_batch_view(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(id): Path<Uuid>,
) -> AppResult<BatchResponse> {
    let scope = context.require_branch()?;
    let registry = &state.managers.transaction_batches;
    let batch = registry.accept_view(id, scope, context.user_id).await?;
    Ok(Json(registry.to_response(&batch)))
}

async fn transaction_batch_view_requests(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<TransactionBatch>> {
    let scope = context.require_branch()?;
    let registry = &state.managers.transaction_batches;
    let batches = registry
        .view_requests(scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(registry.to_responses(&batches)))
}

async fn transaction_batches_closed_today(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<Responses<TransactionBatch>> {
    let scope = context.require_branch()?;
    let registry = &state.managers.transaction_batches;
    let batches = registry
        .closed_today(scope.organization_id, scope.branch_id)
        .await?;
    Ok(Json(registry.to_responses(&batches)))
}

// =========================================================================
// Footsteps
// =========================================================================

async fn branch_footsteps(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Footstep>>> {
    let scope = context.require_branch()?;
    let footsteps = state
        .footsteps
        .by_branch(scope.organization_id, scope.branch_id, query.limit.clamp(1, 1000))
        .await?;
    Ok(Json(footsteps))
}

async fn verify_footsteps(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ChainVerificationResult>> {
    let result = state
        .footsteps
        .verify_chain(Some(query.limit.clamp(1, 100_000)))
        .await?;
    if !result.is_valid {
        tracing::error!(
            first_invalid_entry = ?result.first_invalid_entry,
            "Footstep chain verification failed"
        );
    }
    Ok(Json(result))
}

// =========================================================================
// Seeding
// =========================================================================

/// Seed banks and denominations for the caller's branch
async fn seed_organization(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> AppResult<(StatusCode, Json<SeedSummary>)> {
    let scope = context.require_branch()?;
    let user_id = context.require_user()?;

    let mut tx = state.pool.begin().await?;
    let summary = seed::organization_seeder(
        &state.managers,
        &mut *tx,
        user_id,
        scope.organization_id,
        scope.branch_id,
    )
    .await?;
    tx.commit().await?;

    track(
        &state,
        &context,
        FootstepBuilder::new("seed", "organization")
            .description(format!(
                "{} banks, {} bill and coins",
                summary.banks, summary.bill_and_coins
            )),
    )
    .await;

    Ok((StatusCode::CREATED, Json(summary)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voucher_query_status() {
        let query: VoucherQuery = serde_json::from_str(r#"{"status": "approved"}"#).unwrap();
        assert_eq!(query.status, Some(VoucherStatus::Approved));

        let query: VoucherQuery = serde_json::from_str("{}").unwrap();
        assert!(query.status.is_none());
    }

    #[test]
    fn test_limit_query_defaults() {
        let query: LimitQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 50);
    }
}
