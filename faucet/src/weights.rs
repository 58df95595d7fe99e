//! Autogenerated weights for `pallet_faucet`
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

/// Weight functions needed for `pallet_faucet`.
pub trait WeightInfo {
	fn set_assets() -> Weight;
	fn request_tokens() -> Weight;
	fn replenish() -> Weight;
}

/// Weights for `pallet_faucet` using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `Faucet::DispensedAssets` (r:0 w:1)
	/// Storage: `Assets::Asset` (r:2 w:0)
	fn set_assets() -> Weight {
		Weight::from_parts(18_000_000, 7266)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `Faucet::DispensedAssets` (r:1 w:0)
	/// Storage: `Faucet::LastRequestTime` (r:1 w:1)
	/// Storage: `Assets::Asset` (r:2 w:2)
	/// Storage: `Assets::Account` (r:4 w:4)
	/// Storage: `Timestamp::Now` (r:1 w:0)
	fn request_tokens() -> Weight {
		Weight::from_parts(98_000_000, 13905)
			.saturating_add(T::DbWeight::get().reads(9_u64))
			.saturating_add(T::DbWeight::get().writes(7_u64))
	}
	/// Storage: `Faucet::DispensedAssets` (r:1 w:0)
	/// Storage: `Assets::Asset` (r:2 w:2)
	/// Storage: `Assets::Account` (r:4 w:4)
	fn replenish() -> Weight {
		Weight::from_parts(92_000_000, 13905)
			.saturating_add(T::DbWeight::get().reads(7_u64))
			.saturating_add(T::DbWeight::get().writes(6_u64))
	}
}

// For backwards compatibility and tests.
impl WeightInfo for () {
	fn set_assets() -> Weight {
		Weight::from_parts(18_000_000, 7266)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn request_tokens() -> Weight {
		Weight::from_parts(98_000_000, 13905)
			.saturating_add(RocksDbWeight::get().reads(9_u64))
			.saturating_add(RocksDbWeight::get().writes(7_u64))
	}
	fn replenish() -> Weight {
		Weight::from_parts(92_000_000, 13905)
			.saturating_add(RocksDbWeight::get().reads(7_u64))
			.saturating_add(RocksDbWeight::get().writes(6_u64))
	}
}
