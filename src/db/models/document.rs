//! Meeting-minutes (notulen) models.
//!
//! Column names mirror the externally-owned `tabel notulen` table and
//! must stay byte-identical for dashboard compatibility.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row of `` `tabel notulen` ``. All content fields are nullable:
/// the store accepts whatever the dashboard sends, including nothing.
/// `tanggal_notulen` is assumed to be a textual column (the dashboard
/// submits it as a plain string); a MySQL `DATE` column would need a
/// chrono-typed field instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id_notulen: i64,
    pub nomor_notulen: Option<String>,
    pub nama_notulen: Option<String>,
    pub tanggal_notulen: Option<String>,
    pub jenis: Option<String>,
    pub status_notulen: Option<String>,
}

/// Create/update body. Fields absent from the request bind as SQL NULL;
/// there is no partial-update merge.
#[derive(Debug, Default, Deserialize)]
pub struct DocumentPayload {
    pub nomor_notulen: Option<String>,
    pub nama_notulen: Option<String>,
    pub tanggal_notulen: Option<String>,
    pub jenis: Option<String>,
    pub status_notulen: Option<String>,
}
