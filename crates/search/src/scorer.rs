//! BM25-lite term scoring
//!
//! Scores rank matching documents within a result page; they are never
//! surfaced to callers. The formula is the standard smoothed IDF combined
//! with term-frequency saturation and document-length normalization:
//!
//! score(t, d) = IDF(t) * (tf * (k1 + 1)) / (tf + k1 * (1 - b + b * dl/avgdl))

/// Term-frequency saturation parameter
pub const K1: f32 = 1.2;

/// Document-length normalization strength
pub const B: f32 = 0.75;

/// Inverse document frequency with smoothing
///
/// IDF(t) = ln((N - df + 0.5) / (df + 0.5) + 1)
pub fn idf(total_docs: usize, doc_freq: usize) -> f32 {
    let n = total_docs as f32;
    let df = doc_freq as f32;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// Score one term's contribution for one document
pub fn term_score(tf: u32, doc_len: u32, avg_doc_len: f32, idf: f32) -> f32 {
    if tf == 0 {
        return 0.0;
    }
    let tf = tf as f32;
    let dl = doc_len as f32;
    let avgdl = if avg_doc_len > 0.0 { avg_doc_len } else { 1.0 };
    idf * (tf * (K1 + 1.0)) / (tf + K1 * (1.0 - B + B * dl / avgdl))
}
