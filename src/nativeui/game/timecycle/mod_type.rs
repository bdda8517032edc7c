//! Keys of the entries stored in a time cycle modifier, as the engine numbers them.

macro_rules! mod_types {
    ($($variant:ident => $name:literal = $value:literal),* $(,)?) => {
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum TimeCycleModifierModType {
            $($variant = $value),*
        }

        impl TimeCycleModifierModType {
            /// Every known mod type, indexed by its value.
            pub const ALL: &'static [TimeCycleModifierModType] = &[
                $(TimeCycleModifierModType::$variant),*
            ];

            /// The engine's name of this mod type, as used in `timecycle_mods` files.
            pub fn name(&self) -> &'static str {
                match self {
                    $(TimeCycleModifierModType::$variant => $name),*
                }
            }
        }
    };
}

mod_types! {
    LightDirColR => "light_dir_col_r" = 0,
    LightDirColG => "light_dir_col_g" = 1,
    LightDirColB => "light_dir_col_b" = 2,
    LightDirMult => "light_dir_mult" = 3,
    LightDirectionalAmbColR => "light_directional_amb_col_r" = 4,
    LightDirectionalAmbColG => "light_directional_amb_col_g" = 5,
    LightDirectionalAmbColB => "light_directional_amb_col_b" = 6,
    LightDirectionalAmbIntensity => "light_directional_amb_intensity" = 7,
    LightDirectionalAmbIntensityMult => "light_directional_amb_intensity_mult" = 8,
    LightDirectionalAmbBounceEnabled => "light_directional_amb_bounce_enabled" = 9,
    LightAmbDownWrap => "light_amb_down_wrap" = 10,
    LightNaturalAmbDownColR => "light_natural_amb_down_col_r" = 11,
    LightNaturalAmbDownColG => "light_natural_amb_down_col_g" = 12,
    LightNaturalAmbDownColB => "light_natural_amb_down_col_b" = 13,
    LightNaturalAmbDownIntensity => "light_natural_amb_down_intensity" = 14,
    LightNaturalAmbUpColR => "light_natural_amb_up_col_r" = 15,
    LightNaturalAmbUpColG => "light_natural_amb_up_col_g" = 16,
    LightNaturalAmbUpColB => "light_natural_amb_up_col_b" = 17,
    LightNaturalAmbUpIntensity => "light_natural_amb_up_intensity" = 18,
    LightNaturalAmbUpIntensityMult => "light_natural_amb_up_intensity_mult" = 19,
    LightNaturalPush => "light_natural_push" = 20,
    LightAmbientBakeRamp => "light_ambient_bake_ramp" = 21,
    LightArtificialIntDownColR => "light_artificial_int_down_col_r" = 22,
    LightArtificialIntDownColG => "light_artificial_int_down_col_g" = 23,
    LightArtificialIntDownColB => "light_artificial_int_down_col_b" = 24,
    LightArtificialIntDownIntensity => "light_artificial_int_down_intensity" = 25,
    LightArtificialIntUpColR => "light_artificial_int_up_col_r" = 26,
    LightArtificialIntUpColG => "light_artificial_int_up_col_g" = 27,
    LightArtificialIntUpColB => "light_artificial_int_up_col_b" = 28,
    LightArtificialIntUpIntensity => "light_artificial_int_up_intensity" = 29,
    LightArtificialExtDownColR => "light_artificial_ext_down_col_r" = 30,
    LightArtificialExtDownColG => "light_artificial_ext_down_col_g" = 31,
    LightArtificialExtDownColB => "light_artificial_ext_down_col_b" = 32,
    LightArtificialExtDownIntensity => "light_artificial_ext_down_intensity" = 33,
    LightArtificialExtUpColR => "light_artificial_ext_up_col_r" = 34,
    LightArtificialExtUpColG => "light_artificial_ext_up_col_g" = 35,
    LightArtificialExtUpColB => "light_artificial_ext_up_col_b" = 36,
    LightArtificialExtUpIntensity => "light_artificial_ext_up_intensity" = 37,
    PedLightColR => "ped_light_col_r" = 38,
    PedLightColG => "ped_light_col_g" = 39,
    PedLightColB => "ped_light_col_b" = 40,
    PedLightMult => "ped_light_mult" = 41,
    PedLightDirectionX => "ped_light_direction_x" = 42,
    PedLightDirectionY => "ped_light_direction_y" = 43,
    PedLightDirectionZ => "ped_light_direction_z" = 44,
    LightAmbOccMult => "light_amb_occ_mult" = 45,
    LightAmbOccMultPed => "light_amb_occ_mult_ped" = 46,
    LightAmbOccMultVeh => "light_amb_occ_mult_veh" = 47,
    LightAmbOccMultProp => "light_amb_occ_mult_prop" = 48,
    LightAmbVolumesInDiffuse => "light_amb_volumes_in_diffuse" = 49,
    SsaoInten => "ssao_inten" = 50,
    SsaoType => "ssao_type" = 51,
    SsaoCpStrength => "ssao_cp_strength" = 52,
    SsaoQsStrength => "ssao_qs_strength" = 53,
    LightPedRimMult => "light_ped_rim_mult" = 54,
    LightDynamicBakeTweak => "light_dynamic_bake_tweak" = 55,
    LightVehicleSecondSpecOverride => "light_vehicle_second_spec_override" = 56,
    LightVehicleIntenityScale => "light_vehicle_intenity_scale" = 57,
    LightDirectionOverride => "light_direction_override" = 58,
    LightDirectionOverrideOverridesSun => "light_direction_override_overrides_sun" = 59,
    SunDirectionX => "sun_direction_x" = 60,
    SunDirectionY => "sun_direction_y" = 61,
    SunDirectionZ => "sun_direction_z" = 62,
    MoonDirectionX => "moon_direction_x" = 63,
    MoonDirectionY => "moon_direction_y" = 64,
    MoonDirectionZ => "moon_direction_z" = 65,
    LightRayColR => "light_ray_col_r" = 66,
    LightRayColG => "light_ray_col_g" = 67,
    LightRayColB => "light_ray_col_b" = 68,
    LightRayMult => "light_ray_mult" = 69,
    LightRayUnderwaterMult => "light_ray_underwater_mult" = 70,
    LightRayDist => "light_ray_dist" = 71,
    LightRayHeightfalloff => "light_ray_heightfalloff" = 72,
    LightRayHeightFalloffStart => "light_ray_height_falloff_start" = 73,
    LightRayAddReducer => "light_ray_add_reducer" = 74,
    LightRayBlitSize => "light_ray_blit_size" = 75,
    LightRayLength => "light_ray_length" = 76,
    PostfxExposure => "postfx_exposure" = 77,
    PostfxExposureMin => "postfx_exposure_min" = 78,
    PostfxExposureMax => "postfx_exposure_max" = 79,
    PostfxBrightPassThreshWidth => "postfx_bright_pass_thresh_width" = 80,
    PostfxBrightPassThresh => "postfx_bright_pass_thresh" = 81,
    PostfxIntensityBloom => "postfx_intensity_bloom" = 82,
    PostfxCorrectColR => "postfx_correct_col_r" = 83,
    PostfxCorrectColG => "postfx_correct_col_g" = 84,
    PostfxCorrectColB => "postfx_correct_col_b" = 85,
    PostfxCorrectCutoff => "postfx_correct_cutoff" = 86,
    PostfxShiftColR => "postfx_shift_col_r" = 87,
    PostfxShiftColG => "postfx_shift_col_g" = 88,
    PostfxShiftColB => "postfx_shift_col_b" = 89,
    PostfxShiftCutoff => "postfx_shift_cutoff" = 90,
    PostfxDesaturation => "postfx_desaturation" = 91,
    PostfxNoise => "postfx_noise" = 92,
    PostfxNoiseSize => "postfx_noise_size" = 93,
    PostfxTonemapFilmicOverrideDark => "postfx_tonemap_filmic_override_dark" = 94,
    PostfxTonemapFilmicExposureDark => "postfx_tonemap_filmic_exposure_dark" = 95,
    PostfxTonemapFilmicA => "postfx_tonemap_filmic_a" = 96,
    PostfxTonemapFilmicB => "postfx_tonemap_filmic_b" = 97,
    PostfxTonemapFilmicC => "postfx_tonemap_filmic_c" = 98,
    PostfxTonemapFilmicD => "postfx_tonemap_filmic_d" = 99,
    PostfxTonemapFilmicE => "postfx_tonemap_filmic_e" = 100,
    PostfxTonemapFilmicF => "postfx_tonemap_filmic_f" = 101,
    PostfxTonemapFilmicW => "postfx_tonemap_filmic_w" = 102,
    PostfxTonemapFilmicOverrideBright => "postfx_tonemap_filmic_override_bright" = 103,
    PostfxTonemapFilmicExposureBright => "postfx_tonemap_filmic_exposure_bright" = 104,
    PostfxTonemapFilmicABright => "postfx_tonemap_filmic_a_bright" = 105,
    PostfxTonemapFilmicBBright => "postfx_tonemap_filmic_b_bright" = 106,
    PostfxTonemapFilmicCBright => "postfx_tonemap_filmic_c_bright" = 107,
    PostfxTonemapFilmicDBright => "postfx_tonemap_filmic_d_bright" = 108,
    PostfxTonemapFilmicEBright => "postfx_tonemap_filmic_e_bright" = 109,
    PostfxTonemapFilmicFBright => "postfx_tonemap_filmic_f_bright" = 110,
    PostfxTonemapFilmicWBright => "postfx_tonemap_filmic_w_bright" = 111,
    PostfxVignettingIntensity => "postfx_vignetting_intensity" = 112,
    PostfxVignettingRadius => "postfx_vignetting_radius" = 113,
    PostfxVignettingContrast => "postfx_vignetting_contrast" = 114,
    PostfxVignettingColR => "postfx_vignetting_col_r" = 115,
    PostfxVignettingColG => "postfx_vignetting_col_g" = 116,
    PostfxVignettingColB => "postfx_vignetting_col_b" = 117,
    PostfxGradTopColR => "postfx_grad_top_col_r" = 118,
    PostfxGradTopColG => "postfx_grad_top_col_g" = 119,
    PostfxGradTopColB => "postfx_grad_top_col_b" = 120,
    PostfxGradMiddleColR => "postfx_grad_middle_col_r" = 121,
    PostfxGradMiddleColG => "postfx_grad_middle_col_g" = 122,
    PostfxGradMiddleColB => "postfx_grad_middle_col_b" = 123,
    PostfxGradBottomColR => "postfx_grad_bottom_col_r" = 124,
    PostfxGradBottomColG => "postfx_grad_bottom_col_g" = 125,
    PostfxGradBottomColB => "postfx_grad_bottom_col_b" = 126,
    PostfxGradMidpoint => "postfx_grad_midpoint" = 127,
    PostfxGradTopMiddleMidpoint => "postfx_grad_top_middle_midpoint" = 128,
    PostfxGradMiddleBottomMidpoint => "postfx_grad_middle_bottom_midpoint" = 129,
    PostfxScanlineintensity => "postfx_scanlineintensity" = 130,
    PostfxScanlineFrequency0 => "postfx_scanline_frequency_0" = 131,
    PostfxScanlineFrequency1 => "postfx_scanline_frequency_1" = 132,
    PostfxScanlineSpeed => "postfx_scanline_speed" = 133,
    PostfxMotionblurlength => "postfx_motionblurlength" = 134,
    DofFar => "dof_far" = 135,
    DofBlurMid => "dof_blur_mid" = 136,
    DofBlurFar => "dof_blur_far" = 137,
    DofEnableHq => "dof_enable_hq" = 138,
    DofHqSmallblur => "dof_hq_smallblur" = 139,
    DofHqShallowdof => "dof_hq_shallowdof" = 140,
    DofHqNearplaneOut => "dof_hq_nearplane_out" = 141,
    DofHqNearplaneIn => "dof_hq_nearplane_in" = 142,
    DofHqFarplaneOut => "dof_hq_farplane_out" = 143,
    DofHqFarplaneIn => "dof_hq_farplane_in" = 144,
    EnvironmentalBlurIn => "environmental_blur_in" = 145,
    EnvironmentalBlurOut => "environmental_blur_out" = 146,
    EnvironmentalBlurSize => "environmental_blur_size" = 147,
    BokehBrightnessMin => "bokeh_brightness_min" = 148,
    BokehBrightnessMax => "bokeh_brightness_max" = 149,
    BokehFadeMin => "bokeh_fade_min" = 150,
    BokehFadeMax => "bokeh_fade_max" = 151,
    NvLightDirMult => "nv_light_dir_mult" = 152,
    NvLightAmbDownMult => "nv_light_amb_down_mult" = 153,
    NvLightAmbUpMult => "nv_light_amb_up_mult" = 154,
    NvLowLum => "nv_lowLum" = 155,
    NvHighLum => "nv_highLum" = 156,
    NvTopLum => "nv_topLum" = 157,
    NvScalerLum => "nv_scalerLum" = 158,
    NvOffsetLum => "nv_offsetLum" = 159,
    NvOffsetLowLum => "nv_offsetLowLum" = 160,
    NvOffsetHighLum => "nv_offsetHighLum" = 161,
    NvNoiseLum => "nv_noiseLum" = 162,
    NvNoiseLowLum => "nv_noiseLowLum" = 163,
    NvNoiseHighLum => "nv_noiseHighLum" = 164,
    NvBloomLum => "nv_bloomLum" = 165,
    NvColorLumR => "nv_colorLum_r" = 166,
    NvColorLumG => "nv_colorLum_g" = 167,
    NvColorLumB => "nv_colorLum_b" = 168,
    NvColorLowLumR => "nv_colorLowLum_r" = 169,
    NvColorLowLumG => "nv_colorLowLum_g" = 170,
    NvColorLowLumB => "nv_colorLowLum_b" = 171,
    NvColorHighLumR => "nv_colorHighLum_r" = 172,
    NvColorHighLumG => "nv_colorHighLum_g" = 173,
    NvColorHighLumB => "nv_colorHighLum_b" = 174,
    HhStartRange => "hh_startRange" = 175,
    HhFarRange => "hh_farRange" = 176,
    HhMinIntensity => "hh_minIntensity" = 177,
    HhMaxIntensity => "hh_maxIntensity" = 178,
    HhDisplacementU => "hh_displacementU" = 179,
    HhDisplacementV => "hh_displacementV" = 180,
    HhTex1UScale => "hh_tex1UScale" = 181,
    HhTex1VScale => "hh_tex1VScale" = 182,
    HhTex1UOffset => "hh_tex1UOffset" = 183,
    HhTex1VOffset => "hh_tex1VOffset" = 184,
    HhTex2UScale => "hh_tex2UScale" = 185,
    HhTex2VScale => "hh_tex2VScale" = 186,
    HhTex2UOffset => "hh_tex2UOffset" = 187,
    HhTex2VOffset => "hh_tex2VOffset" = 188,
    HhTex1UFrequencyOffset => "hh_tex1UFrequencyOffset" = 189,
    HhTex1UFrequency => "hh_tex1UFrequency" = 190,
    HhTex1UAmplitude => "hh_tex1UAmplitude" = 191,
    HhTex1VScrollingSpeed => "hh_tex1VScrollingSpeed" = 192,
    HhTex2UFrequencyOffset => "hh_tex2UFrequencyOffset" = 193,
    HhTex2UFrequency => "hh_tex2UFrequency" = 194,
    HhTex2UAmplitude => "hh_tex2UAmplitude" = 195,
    HhTex2VScrollingSpeed => "hh_tex2VScrollingSpeed" = 196,
    LensDistCoeff => "lens_dist_coeff" = 197,
    LensDistCubeCoeff => "lens_dist_cube_coeff" = 198,
    ChromAberrationCoeff => "chrom_aberration_coeff" = 199,
    ChromAberrationCoeff2 => "chrom_aberration_coeff2" = 200,
    LensArtefactsIntensity => "lens_artefacts_intensity" = 201,
    LensArtefactsMinExpIntensity => "lens_artefacts_min_exp_intensity" = 202,
    LensArtefactsMaxExpIntensity => "lens_artefacts_max_exp_intensity" = 203,
    BlurVignettingRadius => "blur_vignetting_radius" = 204,
    BlurVignettingIntensity => "blur_vignetting_intensity" = 205,
    ScreenBlurIntensity => "screen_blur_intensity" = 206,
    SkyZenithTransitionPosition => "sky_zenith_transition_position" = 207,
    SkyZenithTransitionEastBlend => "sky_zenith_transition_east_blend" = 208,
    SkyZenithTransitionWestBlend => "sky_zenith_transition_west_blend" = 209,
    SkyZenithBlendStart => "sky_zenith_blend_start" = 210,
    SkyZenithColR => "sky_zenith_col_r" = 211,
    SkyZenithColG => "sky_zenith_col_g" = 212,
    SkyZenithColB => "sky_zenith_col_b" = 213,
    SkyZenithColInten => "sky_zenith_col_inten" = 214,
    SkyZenithTransitionColR => "sky_zenith_transition_col_r" = 215,
    SkyZenithTransitionColG => "sky_zenith_transition_col_g" = 216,
    SkyZenithTransitionColB => "sky_zenith_transition_col_b" = 217,
    SkyZenithTransitionColInten => "sky_zenith_transition_col_inten" = 218,
    SkyAzimuthTransitionPosition => "sky_azimuth_transition_position" = 219,
    SkyAzimuthEastColR => "sky_azimuth_east_col_r" = 220,
    SkyAzimuthEastColG => "sky_azimuth_east_col_g" = 221,
    SkyAzimuthEastColB => "sky_azimuth_east_col_b" = 222,
    SkyAzimuthEastColInten => "sky_azimuth_east_col_inten" = 223,
    SkyAzimuthTransitionColR => "sky_azimuth_transition_col_r" = 224,
    SkyAzimuthTransitionColG => "sky_azimuth_transition_col_g" = 225,
    SkyAzimuthTransitionColB => "sky_azimuth_transition_col_b" = 226,
    SkyAzimuthTransitionColInten => "sky_azimuth_transition_col_inten" = 227,
    SkyAzimuthWestColR => "sky_azimuth_west_col_r" = 228,
    SkyAzimuthWestColG => "sky_azimuth_west_col_g" = 229,
    SkyAzimuthWestColB => "sky_azimuth_west_col_b" = 230,
    SkyAzimuthWestColInten => "sky_azimuth_west_col_inten" = 231,
    SkyHdr => "sky_hdr" = 232,
    SkyPlaneR => "sky_plane_r" = 233,
    SkyPlaneG => "sky_plane_g" = 234,
    SkyPlaneB => "sky_plane_b" = 235,
    SkyPlaneInten => "sky_plane_inten" = 236,
    SkySunColR => "sky_sun_col_r" = 237,
    SkySunColG => "sky_sun_col_g" = 238,
    SkySunColB => "sky_sun_col_b" = 239,
    SkySunDiscColR => "sky_sun_disc_col_r" = 240,
    SkySunDiscColG => "sky_sun_disc_col_g" = 241,
    SkySunDiscColB => "sky_sun_disc_col_b" = 242,
    SkySunDiscSize => "sky_sun_disc_size" = 243,
    SkySunHdr => "sky_sun_hdr" = 244,
    SkySunMiephase => "sky_sun_miephase" = 245,
    SkySunMiescatter => "sky_sun_miescatter" = 246,
    SkySunMieIntensityMult => "sky_sun_mie_intensity_mult" = 247,
    SkySunInfluenceRadius => "sky_sun_influence_radius" = 248,
    SkySunScatterInten => "sky_sun_scatter_inten" = 249,
    SkyMoonColR => "sky_moon_col_r" = 250,
    SkyMoonColG => "sky_moon_col_g" = 251,
    SkyMoonColB => "sky_moon_col_b" = 252,
    SkyMoonDiscSize => "sky_moon_disc_size" = 253,
    SkyMoonIten => "sky_moon_iten" = 254,
    SkyStarsIten => "sky_stars_iten" = 255,
    SkyMoonInfluenceRadius => "sky_moon_influence_radius" = 256,
    SkyMoonScatterInten => "sky_moon_scatter_inten" = 257,
    SkyCloudGenFrequency => "sky_cloud_gen_frequency" = 258,
    SkyCloudGenScale => "sky_cloud_gen_scale" = 259,
    SkyCloudGenThreshold => "sky_cloud_gen_threshold" = 260,
    SkyCloudGenSoftness => "sky_cloud_gen_softness" = 261,
    SkyCloudDensityMult => "sky_cloud_density_mult" = 262,
    SkyCloudDensityBias => "sky_cloud_density_bias" = 263,
    SkyCloudMidColR => "sky_cloud_mid_col_r" = 264,
    SkyCloudMidColG => "sky_cloud_mid_col_g" = 265,
    SkyCloudMidColB => "sky_cloud_mid_col_b" = 266,
    SkyCloudBaseColR => "sky_cloud_base_col_r" = 267,
    SkyCloudBaseColG => "sky_cloud_base_col_g" = 268,
    SkyCloudBaseColB => "sky_cloud_base_col_b" = 269,
    SkyCloudBaseStrength => "sky_cloud_base_strength" = 270,
    SkyCloudShadowColR => "sky_cloud_shadow_col_r" = 271,
    SkyCloudShadowColG => "sky_cloud_shadow_col_g" = 272,
    SkyCloudShadowColB => "sky_cloud_shadow_col_b" = 273,
    SkyCloudShadowStrength => "sky_cloud_shadow_strength" = 274,
    SkyCloudGenDensityOffset => "sky_cloud_gen_density_offset" = 275,
    SkyCloudOffset => "sky_cloud_offset" = 276,
    SkyCloudOverallStrength => "sky_cloud_overall_strength" = 277,
    SkyCloudOverallColor => "sky_cloud_overall_color" = 278,
    SkyCloudEdgeStrength => "sky_cloud_edge_strength" = 279,
    SkyCloudFadeout => "sky_cloud_fadeout" = 280,
    SkyCloudHdr => "sky_cloud_hdr" = 281,
    SkyCloudDitherStrength => "sky_cloud_dither_strength" = 282,
    SkySmallCloudColR => "sky_small_cloud_col_r" = 283,
    SkySmallCloudColG => "sky_small_cloud_col_g" = 284,
    SkySmallCloudColB => "sky_small_cloud_col_b" = 285,
    SkySmallCloudDetailStrength => "sky_small_cloud_detail_strength" = 286,
    SkySmallCloudDetailScale => "sky_small_cloud_detail_scale" = 287,
    SkySmallCloudDensityMult => "sky_small_cloud_density_mult" = 288,
    SkySmallCloudDensityBias => "sky_small_cloud_density_bias" = 289,
    CloudShadowDensity => "cloud_shadow_density" = 290,
    CloudShadowSoftness => "cloud_shadow_softness" = 291,
    CloudShadowOpacity => "cloud_shadow_opacity" = 292,
    DirShadowNumCascades => "dir_shadow_num_cascades" = 293,
    DirShadowDistanceMultiplier => "dir_shadow_distance_multiplier" = 294,
    DirShadowSoftness => "dir_shadow_softness" = 295,
    DirShadowCascade0Scale => "dir_shadow_cascade0_scale" = 296,
    SpriteBrightness => "sprite_brightness" = 297,
    SpriteSize => "sprite_size" = 298,
    SpriteCoronaScreenspaceExpansion => "sprite_corona_screenspace_expansion" = 299,
    LensflareVisibility => "Lensflare_visibility" = 300,
    SpriteDistantLightTwinkle => "sprite_distant_light_twinkle" = 301,
    WaterReflection => "water_reflection" = 302,
    WaterReflectionFarClip => "water_reflection_far_clip" = 303,
    WaterReflectionLod => "water_reflection_lod" = 304,
    WaterReflectionSkyFlodRange => "water_reflection_sky_flod_range" = 305,
    WaterReflectionLodRangeEnabled => "water_reflection_lod_range_enabled" = 306,
    WaterReflectionLodRangeHdStart => "water_reflection_lod_range_hd_start" = 307,
    WaterReflectionLodRangeHdEnd => "water_reflection_lod_range_hd_end" = 308,
    WaterReflectionLodRangeOrphanhdStart => "water_reflection_lod_range_orphanhd_start" = 309,
    WaterReflectionLodRangeOrphanhdEnd => "water_reflection_lod_range_orphanhd_end" = 310,
    WaterReflectionLodRangeLodStart => "water_reflection_lod_range_lod_start" = 311,
    WaterReflectionLodRangeLodEnd => "water_reflection_lod_range_lod_end" = 312,
    WaterReflectionLodRangeSlod1Start => "water_reflection_lod_range_slod1_start" = 313,
    WaterReflectionLodRangeSlod1End => "water_reflection_lod_range_slod1_end" = 314,
    WaterReflectionLodRangeSlod2Start => "water_reflection_lod_range_slod2_start" = 315,
    WaterReflectionLodRangeSlod2End => "water_reflection_lod_range_slod2_end" = 316,
    WaterReflectionLodRangeSlod3Start => "water_reflection_lod_range_slod3_start" = 317,
    WaterReflectionLodRangeSlod3End => "water_reflection_lod_range_slod3_end" = 318,
    WaterReflectionLodRangeSlod4Start => "water_reflection_lod_range_slod4_start" = 319,
    WaterReflectionLodRangeSlod4End => "water_reflection_lod_range_slod4_end" = 320,
    WaterReflectionHeightOffset => "water_reflection_height_offset" = 321,
    WaterReflectionHeightOverride => "water_reflection_height_override" = 322,
    WaterReflectionHeightOverrideAmount => "water_reflection_height_override_amount" = 323,
    WaterReflectionDistantLightIntensity => "water_reflection_distant_light_intensity" = 324,
    WaterReflectionCoronaIntensity => "water_reflection_corona_intensity" = 325,
    WaterFoglight => "water_foglight" = 326,
    WaterInterior => "water_interior" = 327,
    WaterFogstreaming => "water_fogstreaming" = 328,
    WaterFoamIntensityMult => "water_foam_intensity_mult" = 329,
    WaterDryingSpeedMult => "water_drying_speed_mult" = 330,
    WaterSpecularIntensity => "water_specular_intensity" = 331,
    MirrorReflectionLocalLightIntensity => "mirror_reflection_local_light_intensity" = 332,
    FogStart => "fog_start" = 333,
    FogNearColR => "fog_near_col_r" = 334,
    FogNearColG => "fog_near_col_g" = 335,
    FogNearColB => "fog_near_col_b" = 336,
    FogNearColA => "fog_near_col_a" = 337,
    FogColR => "fog_col_r" = 338,
    FogColG => "fog_col_g" = 339,
    FogColB => "fog_col_b" = 340,
    FogColA => "fog_col_a" = 341,
    FogSunLightingCalcPow => "fog_sun_lighting_calc_pow" = 342,
    FogMoonColR => "fog_moon_col_r" = 343,
    FogMoonColG => "fog_moon_col_g" = 344,
    FogMoonColB => "fog_moon_col_b" = 345,
    FogMoonColA => "fog_moon_col_a" = 346,
    FogMoonLightingCalcPow => "fog_moon_lighting_calc_pow" = 347,
    FogEastColR => "fog_east_col_r" = 348,
    FogEastColG => "fog_east_col_g" = 349,
    FogEastColB => "fog_east_col_b" = 350,
    FogEastColA => "fog_east_col_a" = 351,
    FogDensity => "fog_density" = 352,
    FogFalloff => "fog_falloff" = 353,
    FogBaseHeight => "fog_base_height" = 354,
    FogAlpha => "fog_alpha" = 355,
    FogHorizonTintScale => "fog_horizon_tint_scale" = 356,
    FogHdr => "fog_hdr" = 357,
    FogHazeColR => "fog_haze_col_r" = 358,
    FogHazeColG => "fog_haze_col_g" = 359,
    FogHazeColB => "fog_haze_col_b" = 360,
    FogHazeDensity => "fog_haze_density" = 361,
    FogHazeAlpha => "fog_haze_alpha" = 362,
    FogHazeHdr => "fog_haze_hdr" = 363,
    FogHazeStart => "fog_haze_start" = 364,
    FogShapeBottom => "fog_shape_bottom" = 365,
    FogShapeTop => "fog_shape_top" = 366,
    FogShapeLog10OfVisibility => "fog_shape_log_10_of_visibility" = 367,
    FogShapeWeight0 => "fog_shape_weight_0" = 368,
    FogShapeWeight1 => "fog_shape_weight_1" = 369,
    FogShapeWeight2 => "fog_shape_weight_2" = 370,
    FogShapeWeight3 => "fog_shape_weight_3" = 371,
    FogShadowAmount => "fog_shadow_amount" = 372,
    FogShadowFalloff => "fog_shadow_falloff" = 373,
    FogShadowBaseHeight => "fog_shadow_base_height" = 374,
    FogVolumeLightRange => "fog_volume_light_range" = 375,
    FogVolumeLightFade => "fog_volume_light_fade" = 376,
    FogVolumeLightIntensity => "fog_volume_light_intensity" = 377,
    FogVolumeLightSize => "fog_volume_light_size" = 378,
    FograyContrast => "fogray_contrast" = 379,
    FograyIntensity => "fogray_intensity" = 380,
    FograyDensity => "fogray_density" = 381,
    FograyNearfade => "fogray_nearfade" = 382,
    FograyFarfade => "fogray_farfade" = 383,
    ReflectionLodRangeStart => "reflection_lod_range_start" = 384,
    ReflectionLodRangeEnd => "reflection_lod_range_end" = 385,
    ReflectionSlodRangeStart => "reflection_slod_range_start" = 386,
    ReflectionSlodRangeEnd => "reflection_slod_range_end" = 387,
    ReflectionInteriorRange => "reflection_interior_range" = 388,
    ReflectionTweakInteriorAmb => "reflection_tweak_interior_amb" = 389,
    ReflectionTweakExteriorAmb => "reflection_tweak_exterior_amb" = 390,
    ReflectionTweakEmissive => "reflection_tweak_emissive" = 391,
    ReflectionTweakDirectional => "reflection_tweak_directional" = 392,
    ReflectionHdrMult => "reflection_hdr_mult" = 393,
    FarClip => "far_clip" = 394,
    Temperature => "temperature" = 395,
    ParticleEmissiveIntensityMult => "particle_emissive_intensity_mult" = 396,
    VfxlightningIntensityMult => "vfxlightning_intensity_mult" = 397,
    VfxlightningVisibility => "vfxlightning_visibility" = 398,
    ParticleLightIntensityMult => "particle_light_intensity_mult" = 399,
    NaturalAmbientMultiplier => "natural_ambient_multiplier" = 400,
    ArtificialIntAmbientMultiplier => "artificial_int_ambient_multiplier" = 401,
    FogCutOff => "fog_cut_off" = 402,
    NoWeatherFx => "no_weather_fx" = 403,
    NoGpuFx => "no_gpu_fx" = 404,
    NoRain => "no_rain" = 405,
    NoRainRipples => "no_rain_ripples" = 406,
    FogvolumeDensityScalar => "fogvolume_density_scalar" = 407,
    FogvolumeDensityScalarInterior => "fogvolume_density_scalar_interior" = 408,
    FogvolumeFogScaler => "fogvolume_fog_scaler" = 409,
    TimeOffset => "time_offset" = 410,
    VehicleDirtMod => "vehicle_dirt_mod" = 411,
    WindSpeedMult => "wind_speed_mult" = 412,
    EntityReject => "entity_reject" = 413,
    LodMult => "lod_mult" = 414,
    EnableOcclusion => "enable_occlusion" = 415,
    EnableShadowOcclusion => "enable_shadow_occlusion" = 416,
    RenderExterior => "render_exterior" = 417,
    PortalWeight => "portal_weight" = 418,
    LightFalloffMult => "light_falloff_mult" = 419,
    LodlightRangeMult => "lodlight_range_mult" = 420,
    ShadowDistanceMult => "shadow_distance_mult" = 421,
    LodMultHd => "lod_mult_hd" = 422,
    LodMultOrphanhd => "lod_mult_orphanhd" = 423,
    LodMultLod => "lod_mult_lod" = 424,
    LodMultSlod1 => "lod_mult_slod1" = 425,
    LodMultSlod2 => "lod_mult_slod2" = 426,
    LodMultSlod3 => "lod_mult_slod3" = 427,
    LodMultSlod4 => "lod_mult_slod4" = 428,
}

impl TimeCycleModifierModType {
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for TimeCycleModifierModType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        usize::try_from(value).ok()
            .and_then(|index| TimeCycleModifierModType::ALL.get(index))
            .copied()
            .ok_or(value)
    }
}

impl std::str::FromStr for TimeCycleModifierModType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        TimeCycleModifierModType::ALL.iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown mod type `{}`", s))
    }
}

impl std::fmt::Display for TimeCycleModifierModType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::TimeCycleModifierModType;

    #[test]
    fn values_match_positions() {
        assert_eq!(TimeCycleModifierModType::ALL.len(), 429);
        for (i, t) in TimeCycleModifierModType::ALL.iter().enumerate() {
            assert_eq!(t.value() as usize, i);
        }
    }

    #[test]
    fn conversions() {
        assert_eq!(TimeCycleModifierModType::try_from(0), Ok(TimeCycleModifierModType::LightDirColR));
        assert_eq!(TimeCycleModifierModType::try_from(428), Ok(TimeCycleModifierModType::LodMultSlod4));
        assert_eq!(TimeCycleModifierModType::try_from(429), Err(429));
        assert_eq!(TimeCycleModifierModType::try_from(-1), Err(-1));
        assert_eq!("lod_mult_slod4".parse(), Ok(TimeCycleModifierModType::LodMultSlod4));
        assert!("not_a_mod".parse::<TimeCycleModifierModType>().is_err());
        assert_eq!(TimeCycleModifierModType::LightDirMult.to_string(), "light_dir_mult");
    }
}
