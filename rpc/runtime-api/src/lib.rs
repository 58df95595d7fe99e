#![cfg_attr(not(feature = "std"), no_std)]

use codec::Codec;
pub use pallet_swap::rpc::{RpcError, RpcResult};
use sp_runtime::traits::MaybeDisplay;

sp_api::decl_runtime_apis! {
    pub trait SwapApi<AssetId, AssetBalance> where
        AssetId: Codec + MaybeDisplay,
        AssetBalance: Codec + MaybeDisplay,
    {
        fn spot_price(asset_in: AssetId, asset_out: AssetId) -> RpcResult<u128>;
        fn get_swap_output_amount(asset_in: AssetId, asset_out: AssetId, amount_in: AssetBalance) -> RpcResult<AssetBalance>;
        fn get_liquidity_token_id(asset_a: AssetId, asset_b: AssetId) -> RpcResult<AssetId>;
    }
}
