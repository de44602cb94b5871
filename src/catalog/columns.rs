//! Column names of the merged target catalog.
//!
//! Names carry a namespace prefix naming the source catalog:
//!
//! | prefix     | source                                        |
//! |------------|-----------------------------------------------|
//! | `OBS_`     | TESS short-cadence observing information      |
//! | `TICv8_`   | TESS Input Catalog version 8                  |
//! | `GAIADR2_` | Gaia Data Release 2 astrometry and photometry |
//! | `BANYAN_`  | BANYAN Sigma young-association probabilities  |
//!
//! plus the two identifier columns [`TIC_ID`] and [`OBS_SECTOR`].

/// Object identifier column (TESS Input Catalog ID, as text).
pub const TIC_ID: &str = "TIC_ID";

/// Sector membership column: `;`-separated sector numbers, e.g. `"3;5;7"`.
pub const OBS_SECTOR: &str = "OBS_Sector";

/// Columns that every resolved key list contains, in catalog order.
pub const IDENTIFIER_KEYS: [&str; 2] = [TIC_ID, OBS_SECTOR];

/// Every column of the catalog file, in canonical order.
pub const ALL_KEYS: &[&str] = &[
    "TIC_ID",

    "OBS_TICID",
    "OBS_Tmag",
    "OBS_RA",
    "OBS_Dec",
    "OBS_Sector",
    "OBS_Camera",
    "OBS_CCD",

    "TICv8_ID",
    "TICv8_version",
    "TICv8_HIP",
    "TICv8_TYC",
    "TICv8_UCAC",
    "TICv8_TWOMASS",
    "TICv8_SDSS",
    "TICv8_ALLWISE",
    "TICv8_GAIA",
    "TICv8_APASS",
    "TICv8_KIC",
    "TICv8_objType",
    "TICv8_typeSrc",
    "TICv8_ra",
    "TICv8_dec",
    "TICv8_POSflag",
    "TICv8_pmRA",
    "TICv8_e_pmRA",
    "TICv8_pmDEC",
    "TICv8_e_pmDEC",
    "TICv8_PMflag",
    "TICv8_plx",
    "TICv8_e_plx",
    "TICv8_PARflag",
    "TICv8_gallong",
    "TICv8_gallat",
    "TICv8_eclong",
    "TICv8_eclat",
    "TICv8_Bmag",
    "TICv8_e_Bmag",
    "TICv8_Vmag",
    "TICv8_e_Vmag",
    "TICv8_umag",
    "TICv8_e_umag",
    "TICv8_gmag",
    "TICv8_e_gmag",
    "TICv8_rmag",
    "TICv8_e_rmag",
    "TICv8_imag",
    "TICv8_e_imag",
    "TICv8_zmag",
    "TICv8_e_zmag",
    "TICv8_Jmag",
    "TICv8_e_Jmag",
    "TICv8_Hmag",
    "TICv8_e_Hmag",
    "TICv8_Kmag",
    "TICv8_e_Kmag",
    "TICv8_TWOMflag",
    "TICv8_prox",
    "TICv8_w1mag",
    "TICv8_e_w1mag",
    "TICv8_w2mag",
    "TICv8_e_w2mag",
    "TICv8_w3mag",
    "TICv8_e_w3mag",
    "TICv8_w4mag",
    "TICv8_e_w4mag",
    "TICv8_GAIAmag",
    "TICv8_e_GAIAmag",
    "TICv8_Tmag",
    "TICv8_e_Tmag",
    "TICv8_TESSflag",
    "TICv8_SPFlag",
    "TICv8_Teff",
    "TICv8_e_Teff",
    "TICv8_logg",
    "TICv8_e_logg",
    "TICv8_MH",
    "TICv8_e_MH",
    "TICv8_rad",
    "TICv8_e_rad",
    "TICv8_mass",
    "TICv8_e_mass",
    "TICv8_rho",
    "TICv8_e_rho",
    "TICv8_lumclass",
    "TICv8_lum",
    "TICv8_e_lum",
    "TICv8_d",
    "TICv8_e_d",
    "TICv8_ebv",
    "TICv8_e_ebv",
    "TICv8_numcont",
    "TICv8_contratio",
    "TICv8_disposition",
    "TICv8_duplicate_id",
    "TICv8_priority",
    "TICv8_eneg_EBV",
    "TICv8_epos_EBV",
    "TICv8_EBVflag",
    "TICv8_eneg_Mass",
    "TICv8_epos_Mass",
    "TICv8_eneg_Rad",
    "TICv8_epos_Rad",
    "TICv8_eneg_rho",
    "TICv8_epos_rho",
    "TICv8_eneg_logg",
    "TICv8_epos_logg",
    "TICv8_eneg_lum",
    "TICv8_epos_lum",
    "TICv8_eneg_dist",
    "TICv8_epos_dist",
    "TICv8_distflag",
    "TICv8_eneg_Teff",
    "TICv8_epos_Teff",
    "TICv8_TeffFlag",
    "TICv8_gaiabp",
    "TICv8_e_gaiabp",
    "TICv8_gaiarp",
    "TICv8_e_gaiarp",
    "TICv8_gaiaqflag",
    "TICv8_starchareFlag",
    "TICv8_VmagFlag",
    "TICv8_BmagFlag",
    "TICv8_splists",
    "TICv8_e_RA",
    "TICv8_e_Dec",
    "TICv8_RA_orig",
    "TICv8_Dec_orig",
    "TICv8_e_RA_orig",
    "TICv8_e_Dec_orig",
    "TICv8_raddflag",
    "TICv8_wdflag",
    "TICv8_objID",

    "GAIADR2_source_id",
    "GAIADR2_random_index",
    "GAIADR2_ref_epoch",
    "GAIADR2_ra",
    "GAIADR2_ra_error",
    "GAIADR2_dec",
    "GAIADR2_dec_error",
    "GAIADR2_parallax",
    "GAIADR2_parallax_error",
    "GAIADR2_parallax_over_error",
    "GAIADR2_pmra",
    "GAIADR2_pmra_error",
    "GAIADR2_pmdec",
    "GAIADR2_pmdec_error",
    "GAIADR2_ra_dec_corr",
    "GAIADR2_ra_parallax_corr",
    "GAIADR2_ra_pmra_corr",
    "GAIADR2_ra_pmdec_corr",
    "GAIADR2_dec_parallax_corr",
    "GAIADR2_dec_pmra_corr",
    "GAIADR2_dec_pmdec_corr",
    "GAIADR2_parallax_pmra_corr",
    "GAIADR2_parallax_pmdec_corr",
    "GAIADR2_pmra_pmdec_corr",
    "GAIADR2_astrometric_n_obs_al",
    "GAIADR2_astrometric_n_obs_ac",
    "GAIADR2_astrometric_n_good_obs_al",
    "GAIADR2_astrometric_n_bad_obs_al",
    "GAIADR2_astrometric_gof_al",
    "GAIADR2_astrometric_chi2_al",
    "GAIADR2_astrometric_excess_noise",
    "GAIADR2_astrometric_excess_noise_sig",
    "GAIADR2_astrometric_params_solved",
    "GAIADR2_astrometric_primary_flag",
    "GAIADR2_astrometric_weight_al",
    "GAIADR2_astrometric_pseudo_colour",
    "GAIADR2_astrometric_pseudo_colour_error",
    "GAIADR2_mean_varpi_factor_al",
    "GAIADR2_astrometric_matched_observations",
    "GAIADR2_visibility_periods_used",
    "GAIADR2_astrometric_sigma5d_max",
    "GAIADR2_frame_rotator_object_type",
    "GAIADR2_matched_observations",
    "GAIADR2_duplicated_source",
    "GAIADR2_phot_g_n_obs",
    "GAIADR2_phot_g_mean_flux",
    "GAIADR2_phot_g_mean_flux_error",
    "GAIADR2_phot_g_mean_flux_over_error",
    "GAIADR2_phot_g_mean_mag",
    "GAIADR2_phot_bp_n_obs",
    "GAIADR2_phot_bp_mean_flux",
    "GAIADR2_phot_bp_mean_flux_error",
    "GAIADR2_phot_bp_mean_flux_over_error",
    "GAIADR2_phot_bp_mean_mag",
    "GAIADR2_phot_rp_n_obs",
    "GAIADR2_phot_rp_mean_flux",
    "GAIADR2_phot_rp_mean_flux_error",
    "GAIADR2_phot_rp_mean_flux_over_error",
    "GAIADR2_phot_rp_mean_mag",
    "GAIADR2_phot_bp_rp_excess_factor",
    "GAIADR2_phot_proc_mode",
    "GAIADR2_bp_rp",
    "GAIADR2_bp_g",
    "GAIADR2_g_rp",
    "GAIADR2_radial_velocity",
    "GAIADR2_radial_velocity_error",
    "GAIADR2_rv_nb_transits",
    "GAIADR2_rv_template_teff",
    "GAIADR2_rv_template_logg",
    "GAIADR2_rv_template_fe_h",
    "GAIADR2_phot_variable_flag",
    "GAIADR2_l",
    "GAIADR2_b",
    "GAIADR2_ecl_lon",
    "GAIADR2_ecl_lat",
    "GAIADR2_priam_flags",
    "GAIADR2_teff_val",
    "GAIADR2_teff_percentile_lower",
    "GAIADR2_teff_percentile_upper",
    "GAIADR2_a_g_val",
    "GAIADR2_a_g_percentile_lower",
    "GAIADR2_a_g_percentile_upper",
    "GAIADR2_e_bp_min_rp_val",
    "GAIADR2_e_bp_min_rp_percentile_lower",
    "GAIADR2_e_bp_min_rp_percentile_upper",
    "GAIADR2_flame_flags",
    "GAIADR2_radius_val",
    "GAIADR2_radius_percentile_lower",
    "GAIADR2_radius_percentile_upper",
    "GAIADR2_lum_val",
    "GAIADR2_lum_percentile_lower",
    "GAIADR2_lum_percentile_upper",

    "BANYAN_TIC_ID",
    "BANYAN_YA_PROB",
    "BANYAN_LIST_PROB_YAS",
    "BANYAN_BEST_HYP",
    "BANYAN_BEST_YA",
];

/// Light-weight default view. Already in catalog order.
pub const DEFAULT_KEYS: &[&str] = &[
    "TIC_ID",
    "OBS_Sector",
    "TICv8_TWOMASS",
    "TICv8_GAIA",
    "TICv8_ra",
    "TICv8_dec",
    "TICv8_pmRA",
    "TICv8_e_pmRA",
    "TICv8_pmDEC",
    "TICv8_e_pmDEC",
    "TICv8_plx",
    "TICv8_e_plx",
    "TICv8_Vmag",
    "TICv8_Kmag",
    "TICv8_GAIAmag",
    "TICv8_Tmag",
    "TICv8_Teff",
    "TICv8_e_Teff",
    "TICv8_logg",
    "TICv8_e_logg",
    "TICv8_MH",
    "TICv8_e_MH",
    "TICv8_rad",
    "TICv8_e_rad",
    "TICv8_mass",
    "TICv8_e_mass",
    "TICv8_rho",
    "TICv8_e_rho",
    "TICv8_lumclass",
    "TICv8_lum",
    "TICv8_e_lum",
    "TICv8_d",
    "TICv8_e_d",
    "TICv8_ebv",
    "TICv8_e_ebv",
    "TICv8_contratio",
    "TICv8_disposition",
    "TICv8_gaiabp",
    "TICv8_gaiarp",
    "TICv8_e_RA",
    "TICv8_e_Dec",
    "GAIADR2_radial_velocity",
    "GAIADR2_radial_velocity_error",
    "BANYAN_YA_PROB",
    "BANYAN_BEST_HYP",
];

/// TICv8 photometry columns.
pub const MAGNITUDE_KEYS: &[&str] = &[
    "TICv8_Bmag",
    "TICv8_e_Bmag",
    "TICv8_Vmag",
    "TICv8_e_Vmag",
    "TICv8_umag",
    "TICv8_e_umag",
    "TICv8_gmag",
    "TICv8_e_gmag",
    "TICv8_rmag",
    "TICv8_e_rmag",
    "TICv8_imag",
    "TICv8_e_imag",
    "TICv8_zmag",
    "TICv8_e_zmag",
    "TICv8_Jmag",
    "TICv8_e_Jmag",
    "TICv8_Hmag",
    "TICv8_e_Hmag",
    "TICv8_Kmag",
    "TICv8_e_Kmag",
    "TICv8_TWOMflag",
    "TICv8_prox",
    "TICv8_w1mag",
    "TICv8_e_w1mag",
    "TICv8_w2mag",
    "TICv8_e_w2mag",
    "TICv8_w3mag",
    "TICv8_e_w3mag",
    "TICv8_w4mag",
    "TICv8_e_w4mag",
    "TICv8_GAIAmag",
    "TICv8_e_GAIAmag",
    "TICv8_Tmag",
    "TICv8_e_Tmag",
];
