//! Batched pattern scanning: a scalar path and, on x86_64 with AVX2, a
//! vectorized path that processes 8 triples per iteration.
//!
//! The two paths are substitutable — same state, same pattern, same
//! sequence of matching indices, in ascending order (property P6 in the
//! design notes). `find_pattern` always finishes any tail shorter than the
//! lane count with the scalar loop.
//!
//! Expressed here only as the semantic contract the design notes call for:
//! "scan 8 triples per iteration, produce a lane mask, emit indices in mask
//! order." Runtime CPU dispatch follows the same cached-`OnceLock` shape
//! used elsewhere in this corpus for avoiding repeated CPUID probing.

use std::sync::OnceLock;

use crate::counters::Counters;
use crate::triple::{Pattern, Triple, WILDCARD};

pub(crate) const SIMD_LANES: usize = 8;

#[derive(Debug, Clone, Copy)]
struct CpuFeatures {
    has_avx2: bool,
}

static CPU_FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

impl CpuFeatures {
    fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            let has_avx2 = std::is_x86_feature_detected!("avx2");
            tracing::info!(has_avx2, "latticestore-core: SIMD pattern matcher CPU dispatch");
            CpuFeatures { has_avx2 }
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            tracing::info!("latticestore-core: non-x86_64 target, pattern matcher uses the scalar path only");
            CpuFeatures { has_avx2: false }
        }
    }

    fn get() -> &'static CpuFeatures {
        CPU_FEATURES.get_or_init(Self::detect)
    }
}

#[inline]
fn simd_available() -> bool {
    CpuFeatures::get().has_avx2
}

/// Scans `triples` for `pattern`, writing up to `max_results` matching
/// indices (ascending) into `out`. Dispatches to the AVX2 kernel when
/// `enable_simd` is set and the CPU supports it; always falls back to the
/// scalar loop for the remainder.
pub(crate) fn find_pattern(
    triples: &[Triple],
    pattern: &Pattern,
    out: &mut [u32],
    max_results: usize,
    enable_simd: bool,
    counters: &Counters,
) -> usize {
    let len = triples.len();
    let mut i = 0usize;
    let mut count = 0usize;

    #[cfg(target_arch = "x86_64")]
    {
        if enable_simd && simd_available() {
            while count < max_results && i + SIMD_LANES <= len {
                // SAFETY: guarded by the runtime AVX2 feature check above,
                // and the block [i, i+SIMD_LANES) is in bounds of `triples`.
                let mask = unsafe { simd_match_block_avx2(triples.as_ptr().add(i), pattern) };
                counters.record_simd_op();
                let mut bits = mask;
                while bits != 0 && count < max_results {
                    let lane = bits.trailing_zeros() as usize;
                    out[count] = (i + lane) as u32;
                    count += 1;
                    bits &= bits - 1;
                }
                i += SIMD_LANES;
            }
        }
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        let _ = enable_simd;
    }

    while count < max_results && i < len {
        if triples[i].matches(pattern) {
            out[count] = i as u32;
            count += 1;
        }
        i += 1;
    }

    count
}

/// Scans a block of exactly [`SIMD_LANES`] contiguous triples against
/// `pattern`, returning an 8-bit mask (bit `k` set iff lane `k` matches).
///
/// Each `Triple` is laid out as four consecutive `u32` words
/// `[subject, predicate, object, flags_and_graph]`; a gather with a
/// 4-word stride pulls one component from all 8 triples in a single
/// instruction.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn simd_match_block_avx2(base: *const Triple, pattern: &Pattern) -> u32 {
    use std::arch::x86_64::*;

    let words = base as *const i32;
    // Word offsets of the 8 triples' first word: 0, 4, 8, ..., 28.
    let lane_offsets = _mm256_setr_epi32(0, 4, 8, 12, 16, 20, 24, 28);

    let subjects = _mm256_i32gather_epi32::<4>(words, lane_offsets);
    let predicates = _mm256_i32gather_epi32::<4>(words.add(1), lane_offsets);
    let objects = _mm256_i32gather_epi32::<4>(words.add(2), lane_offsets);

    let wildcard = _mm256_set1_epi32(WILDCARD as i32);
    let ps = _mm256_set1_epi32(pattern.subject as i32);
    let pp = _mm256_set1_epi32(pattern.predicate as i32);
    let po = _mm256_set1_epi32(pattern.object as i32);

    let s_ok = _mm256_or_si256(_mm256_cmpeq_epi32(ps, wildcard), _mm256_cmpeq_epi32(ps, subjects));
    let p_ok = _mm256_or_si256(_mm256_cmpeq_epi32(pp, wildcard), _mm256_cmpeq_epi32(pp, predicates));
    let o_ok = _mm256_or_si256(_mm256_cmpeq_epi32(po, wildcard), _mm256_cmpeq_epi32(po, objects));

    let all_ok = _mm256_and_si256(_mm256_and_si256(s_ok, p_ok), o_ok);
    _mm256_movemask_ps(_mm256_castsi256_ps(all_ok)) as u32 & 0xFF
}
