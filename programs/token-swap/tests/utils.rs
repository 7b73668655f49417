// Test utilities for the token swap program

#![allow(dead_code)]

use litesvm::{LiteSVM, types::TransactionResult};
use litesvm_token::{CreateAssociatedTokenAccount, CreateMint, MintTo, get_spl_account};
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;
use token_swap::{pda, state::Pool};

// Program ID matching declare_id! (token_swap)
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(token_swap::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// Token decimals
pub const DECIMALS: u8 = 6;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let hash_result = Sha256::digest(format!("global:{}", method).as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result[..8]);
    discriminator
}

// Setup LiteSVM with the token swap program
// Requires `anchor build` so target/deploy/token_swap.so exists
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/token_swap.so");
    let _ = svm.add_program(PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Create two mints and return them in the order pools require (mint_a < mint_b)
pub fn create_ordered_mints(svm: &mut LiteSVM, authority: &Keypair) -> (Pubkey, Pubkey) {
    let first = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint");
    let second = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint");

    if first.to_bytes() < second.to_bytes() {
        (first, second)
    } else {
        (second, first)
    }
}

// Create an ATA for `owner` and mint `amount` into it
pub fn fund_token_account(
    svm: &mut LiteSVM,
    mint_authority: &Keypair,
    owner: &Keypair,
    mint: &Pubkey,
    amount: u64,
) -> Pubkey {
    let ata = CreateAssociatedTokenAccount::new(svm, owner, mint)
        .owner(&owner.pubkey())
        .send()
        .expect("Failed to create ATA");

    if amount > 0 {
        MintTo::new(svm, mint_authority, mint, &ata, amount)
            .owner(mint_authority)
            .send()
            .expect("Failed to mint tokens");
    }
    ata
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    get_spl_account::<spl_token::state::Account>(svm, account)
        .map(|account| account.amount)
        .unwrap_or(0)
}

pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let mint: spl_token::state::Mint =
        get_spl_account(svm, mint).expect("Mint account should exist");
    mint.supply
}

// Sign and send with `signer` as fee payer
pub fn send(svm: &mut LiteSVM, ix: Instruction, signer: &Keypair) -> TransactionResult {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signer.pubkey()),
        &[signer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
}

// Assert the transaction failed with the named Anchor error
pub fn assert_anchor_error(result: TransactionResult, error_name: &str) {
    let failed = result.expect_err("Transaction should have failed");
    let expected = format!("Error Code: {}", error_name);
    assert!(
        failed.meta.logs.iter().any(|log| log.contains(&expected)),
        "Expected {} in logs: {:#?}",
        error_name,
        failed.meta.logs
    );
}

// Conversions between the SDK address type and the program's
fn to_program_key(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

fn to_sdk_key(key: &anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

// Every address a pool touches, derived through the program's own scheme
pub struct PoolAddresses {
    pub amm: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub mint_liquidity: Pubkey,
    pub pool_account_a: Pubkey,
    pub pool_account_b: Pubkey,
}

impl PoolAddresses {
    pub fn new(amm: &Pubkey, mint_a: &Pubkey, mint_b: &Pubkey) -> Self {
        let program_id = token_swap::ID;
        let (amm_key, a, b) = (to_program_key(amm), to_program_key(mint_a), to_program_key(mint_b));

        let (pool, _) = pda::derive_pool(&program_id, &amm_key, &a, &b).unwrap();
        let (pool_authority, _) = pda::derive_pool_authority(&program_id, &amm_key, &a, &b).unwrap();
        let (mint_liquidity, _) = pda::derive_liquidity_mint(&program_id, &amm_key, &a, &b).unwrap();

        let pool_authority = to_sdk_key(&pool_authority);
        Self {
            amm: *amm,
            mint_a: *mint_a,
            mint_b: *mint_b,
            pool: to_sdk_key(&pool),
            pool_authority,
            mint_liquidity: to_sdk_key(&mint_liquidity),
            pool_account_a: get_associated_token_address(&pool_authority, mint_a),
            pool_account_b: get_associated_token_address(&pool_authority, mint_b),
        }
    }

    pub fn liquidity_account(&self, owner: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, &self.mint_liquidity)
    }

    pub fn reserves(&self, svm: &LiteSVM) -> (u64, u64) {
        (
            token_balance(svm, &self.pool_account_a),
            token_balance(svm, &self.pool_account_b),
        )
    }
}

// Derive AMM PDA from its id
pub fn derive_amm_pda(id: &Pubkey) -> Pubkey {
    let (amm, _) = pda::derive_amm(&token_swap::ID, &to_program_key(id)).unwrap();
    to_sdk_key(&amm)
}

// Fetch and decode the pool record
pub fn fetch_pool(svm: &LiteSVM, pool: &Pubkey) -> anchor_lang::Result<Pool> {
    let data = svm.get_account(pool).map(|account| account.data).unwrap_or_default();
    Pool::decode(&data)
}

pub fn same_key(sdk: &Pubkey, program: &anchor_lang::prelude::Pubkey) -> bool {
    sdk.to_bytes() == program.to_bytes()
}

// Build create_amm instruction
pub fn build_create_amm_ix(admin: &Pubkey, payer: &Pubkey, id: &Pubkey, fee: u16) -> Instruction {
    let amm = derive_amm_pda(id);

    let mut data = anchor_discriminator("create_amm").to_vec();
    data.extend_from_slice(&id.to_bytes());
    data.extend_from_slice(&borsh::to_vec(&fee).unwrap());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(amm, false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build create_pool instruction
pub fn build_create_pool_ix(payer: &Pubkey, addresses: &PoolAddresses) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(addresses.amm, false),
            AccountMeta::new(addresses.pool, false),
            AccountMeta::new_readonly(addresses.pool_authority, false),
            AccountMeta::new(addresses.mint_liquidity, false),
            AccountMeta::new_readonly(addresses.mint_a, false),
            AccountMeta::new_readonly(addresses.mint_b, false),
            AccountMeta::new(addresses.pool_account_a, false),
            AccountMeta::new(addresses.pool_account_b, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("create_pool").to_vec(),
    }
}

// Build deposit_liquidity instruction (depositor pays for its own accounts)
pub fn build_deposit_liquidity_ix(
    depositor: &Pubkey,
    addresses: &PoolAddresses,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let mut data = anchor_discriminator("deposit_liquidity").to_vec();
    data.extend_from_slice(&borsh::to_vec(&(amount_a, amount_b)).unwrap());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(addresses.pool, false),
            AccountMeta::new_readonly(addresses.pool_authority, false),
            AccountMeta::new_readonly(*depositor, true),
            AccountMeta::new(addresses.mint_liquidity, false),
            AccountMeta::new_readonly(addresses.mint_a, false),
            AccountMeta::new_readonly(addresses.mint_b, false),
            AccountMeta::new(addresses.pool_account_a, false),
            AccountMeta::new(addresses.pool_account_b, false),
            AccountMeta::new(addresses.liquidity_account(depositor), false),
            AccountMeta::new(get_associated_token_address(depositor, &addresses.mint_a), false),
            AccountMeta::new(get_associated_token_address(depositor, &addresses.mint_b), false),
            AccountMeta::new(*depositor, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build swap_exact_tokens_for_tokens instruction
pub fn build_swap_ix(
    trader: &Pubkey,
    addresses: &PoolAddresses,
    swap_a: bool,
    input_amount: u64,
    min_output_amount: u64,
) -> Instruction {
    let mut data = anchor_discriminator("swap_exact_tokens_for_tokens").to_vec();
    data.extend_from_slice(&borsh::to_vec(&(swap_a, input_amount, min_output_amount)).unwrap());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(addresses.amm, false),
            AccountMeta::new_readonly(addresses.pool, false),
            AccountMeta::new_readonly(addresses.pool_authority, false),
            AccountMeta::new_readonly(*trader, true),
            AccountMeta::new_readonly(addresses.mint_a, false),
            AccountMeta::new_readonly(addresses.mint_b, false),
            AccountMeta::new(addresses.pool_account_a, false),
            AccountMeta::new(addresses.pool_account_b, false),
            AccountMeta::new(get_associated_token_address(trader, &addresses.mint_a), false),
            AccountMeta::new(get_associated_token_address(trader, &addresses.mint_b), false),
            AccountMeta::new(*trader, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build withdraw_liquidity instruction
pub fn build_withdraw_liquidity_ix(
    depositor: &Pubkey,
    addresses: &PoolAddresses,
    amount: u64,
) -> Instruction {
    let mut data = anchor_discriminator("withdraw_liquidity").to_vec();
    data.extend_from_slice(&borsh::to_vec(&amount).unwrap());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(addresses.pool, false),
            AccountMeta::new_readonly(addresses.amm, false),
            AccountMeta::new_readonly(addresses.pool_authority, false),
            AccountMeta::new_readonly(*depositor, true),
            AccountMeta::new(addresses.mint_liquidity, false),
            AccountMeta::new_readonly(addresses.mint_a, false),
            AccountMeta::new_readonly(addresses.mint_b, false),
            AccountMeta::new(addresses.pool_account_a, false),
            AccountMeta::new(addresses.pool_account_b, false),
            AccountMeta::new(addresses.liquidity_account(depositor), false),
            AccountMeta::new(get_associated_token_address(depositor, &addresses.mint_a), false),
            AccountMeta::new(get_associated_token_address(depositor, &addresses.mint_b), false),
            AccountMeta::new(*depositor, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Create an AMM with `fee` and one pool under it, returning the pool addresses
pub fn setup_pool(svm: &mut LiteSVM, admin: &Keypair, fee: u16) -> PoolAddresses {
    let id = Keypair::new().pubkey();
    let result = send(svm, build_create_amm_ix(&admin.pubkey(), &admin.pubkey(), &id, fee), admin);
    assert!(result.is_ok(), "create_amm failed: {:?}", result.err());

    let (mint_a, mint_b) = create_ordered_mints(svm, admin);
    let addresses = PoolAddresses::new(&derive_amm_pda(&id), &mint_a, &mint_b);

    let result = send(svm, build_create_pool_ix(&admin.pubkey(), &addresses), admin);
    assert!(result.is_ok(), "create_pool failed: {:?}", result.err());

    addresses
}
