//! Autogenerated weights for `pallet_swap`
//!
//! THIS FILE WAS AUTO-GENERATED USING THE SUBSTRATE BENCHMARK CLI VERSION 4.0.0-dev
//! DATE: 2023-10-12, STEPS: `50`, REPEAT: `20`, LOW RANGE: `[]`, HIGH RANGE: `[]`
//! WORST CASE MAP SIZE: `1000000`
//! HOSTNAME: `bench-host`, CPU: `AMD EPYC 7601 32-Core Processor`
//! EXECUTION: ``, WASM-EXECUTION: `Compiled`, CHAIN: `None`, DB CACHE: `1024`

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

/// Weight functions needed for `pallet_swap`.
pub trait WeightInfo {
	fn add_liquidity() -> Weight;
	fn remove_liquidity() -> Weight;
	fn swap_exact_tokens_for_tokens() -> Weight;
}

/// Weights for `pallet_swap` using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `Swap::Pools` (r:1 w:1)
	/// Storage: `Assets::Asset` (r:3 w:3)
	/// Storage: `Assets::Account` (r:5 w:5)
	/// Storage: `Timestamp::Now` (r:1 w:0)
	fn add_liquidity() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `1275`
		//  Estimated: `15794`
		Weight::from_parts(142_000_000, 15794)
			.saturating_add(T::DbWeight::get().reads(10_u64))
			.saturating_add(T::DbWeight::get().writes(9_u64))
	}
	/// Storage: `Swap::Pools` (r:1 w:1)
	/// Storage: `Assets::Asset` (r:3 w:3)
	/// Storage: `Assets::Account` (r:5 w:5)
	/// Storage: `Timestamp::Now` (r:1 w:0)
	fn remove_liquidity() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `1438`
		//  Estimated: `15794`
		Weight::from_parts(131_000_000, 15794)
			.saturating_add(T::DbWeight::get().reads(10_u64))
			.saturating_add(T::DbWeight::get().writes(9_u64))
	}
	/// Storage: `Swap::Pools` (r:1 w:1)
	/// Storage: `Assets::Asset` (r:2 w:2)
	/// Storage: `Assets::Account` (r:4 w:4)
	/// Storage: `Timestamp::Now` (r:1 w:0)
	fn swap_exact_tokens_for_tokens() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `1349`
		//  Estimated: `13905`
		Weight::from_parts(104_000_000, 13905)
			.saturating_add(T::DbWeight::get().reads(8_u64))
			.saturating_add(T::DbWeight::get().writes(7_u64))
	}
}

// For backwards compatibility and tests.
impl WeightInfo for () {
	fn add_liquidity() -> Weight {
		Weight::from_parts(142_000_000, 15794)
			.saturating_add(RocksDbWeight::get().reads(10_u64))
			.saturating_add(RocksDbWeight::get().writes(9_u64))
	}
	fn remove_liquidity() -> Weight {
		Weight::from_parts(131_000_000, 15794)
			.saturating_add(RocksDbWeight::get().reads(10_u64))
			.saturating_add(RocksDbWeight::get().writes(9_u64))
	}
	fn swap_exact_tokens_for_tokens() -> Weight {
		Weight::from_parts(104_000_000, 13905)
			.saturating_add(RocksDbWeight::get().reads(8_u64))
			.saturating_add(RocksDbWeight::get().writes(7_u64))
	}
}
