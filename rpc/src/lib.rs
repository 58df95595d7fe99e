use codec::Codec;
use jsonrpsee::{
    core::{async_trait, Error as RpcError, RpcResult},
    proc_macros::rpc,
    types::error::{CallError, ErrorObject},
};
use sp_api::ProvideRuntimeApi;
use sp_blockchain::HeaderBackend;
use sp_runtime::traits::MaybeDisplay;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

pub use pallet_swap_rpc_runtime_api::{RpcError as SwapRpcError, SwapApi as SwapRuntimeApi};


const RUNTIME_ERROR: i32 = 1;
const POOL_NOT_FOUND: i32 = 2;
const NO_RESERVES: i32 = 3;
const IDENTICAL_ASSETS: i32 = 4;
const OVERFLOW: i32 = 5;

#[rpc(client, server)]
pub trait SwapApi<BlockHash, AssetId, AssetBalance> {
    #[method(name = "swap_get_spot_price")]
    fn get_spot_price(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        at: Option<BlockHash>,
    ) -> RpcResult<u128>;

    #[method(name = "swap_get_swap_output_amount")]
    fn get_swap_output_amount(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: AssetBalance,
        at: Option<BlockHash>,
    ) -> RpcResult<AssetBalance>;

    #[method(name = "swap_get_liquidity_token_id")]
    fn get_liquidity_token_id(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
        at: Option<BlockHash>,
    ) -> RpcResult<AssetId>;
}

pub struct Swap<Client, Block> {
    client: Arc<Client>,
    _marker: PhantomData<Block>,
}

type HashOf<Block> = <Block as sp_runtime::traits::Block>::Hash;

impl<Client, Block> Swap<Client, Block>
where
    Block: sp_runtime::traits::Block,
    Client: HeaderBackend<Block>,
{
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client,
            _marker: Default::default(),
        }
    }

    #[inline(always)]
    fn block_hash(&self, block_hash: Option<HashOf<Block>>) -> HashOf<Block> {
        // If the block hash is not supplied assume the best block.
        block_hash.unwrap_or_else(|| self.client.info().best_hash)
    }
}

#[async_trait]
impl<Client, Block, AssetId, AssetBalance> SwapApiServer<HashOf<Block>, AssetId, AssetBalance>
    for Swap<Client, Block>
where
    Block: sp_runtime::traits::Block,
    Client: ProvideRuntimeApi<Block> + HeaderBackend<Block> + Send + Sync + 'static,
    Client::Api: SwapRuntimeApi<Block, AssetId, AssetBalance>,
    AssetId: Codec + MaybeDisplay + Copy + Send + Sync + 'static,
    AssetBalance: Codec + MaybeDisplay + Copy + Send + Sync + 'static,
{
    fn get_spot_price(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        at: Option<HashOf<Block>>,
    ) -> RpcResult<u128> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .spot_price(at, asset_in, asset_out)
            .map_err(runtime_error)?
            .map_err(swap_rpc_error)
    }

    fn get_swap_output_amount(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: AssetBalance,
        at: Option<HashOf<Block>>,
    ) -> RpcResult<AssetBalance> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_swap_output_amount(at, asset_in, asset_out, amount_in)
            .map_err(runtime_error)?
            .map_err(swap_rpc_error)
    }

    fn get_liquidity_token_id(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
        at: Option<HashOf<Block>>,
    ) -> RpcResult<AssetId> {
        let at = self.block_hash(at);
        self.client
            .runtime_api()
            .get_liquidity_token_id(at, asset_a, asset_b)
            .map_err(runtime_error)?
            .map_err(swap_rpc_error)
    }
}

fn runtime_error(err: impl Debug) -> RpcError {
    CallError::Custom(ErrorObject::owned(
        RUNTIME_ERROR,
        "Runtime error",
        Some(format!("{:?}", err)),
    ))
    .into()
}

fn swap_rpc_error(err: SwapRpcError) -> RpcError {
    let (code, message, data) = match err {
        SwapRpcError::PoolNotFound => (POOL_NOT_FOUND, "Pool not found", None),
        SwapRpcError::NoReserves => (NO_RESERVES, "No reserves", None),
        SwapRpcError::IdenticalAssets => (IDENTICAL_ASSETS, "Identical assets", None),
        SwapRpcError::Overflow => (OVERFLOW, "Overflow", None),
        SwapRpcError::Unexpected(msg) => (RUNTIME_ERROR, "Runtime error", Some(msg)),
    };
    CallError::Custom(ErrorObject::owned(code, message, data)).into()
}
